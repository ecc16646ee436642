use buildwatch_plugin_api::PluginRegistry;

macro_rules! define_plugins {
    ($($plugin_crate:ident),* $(,)?) => {
        pub fn init_registry() -> PluginRegistry {
            let mut registry = PluginRegistry::new();
            $(
                $plugin_crate::register(&mut registry);
            )*
            registry
        }
    };
}

define_plugins![
    buildwatch_plugin_buildkite,
    buildwatch_plugin_cctray,
    buildwatch_plugin_cruisecontrol,
];
