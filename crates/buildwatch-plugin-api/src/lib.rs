pub mod error;
pub mod plugin;
pub mod registry;
pub mod schema;
pub mod types;

pub use error::{
    PluginError,
    PluginResult,
};
pub use plugin::{
    Plugin,
    PluginCapabilities,
    PluginMetadata,
};
pub use registry::{
    PluginFactory,
    PluginRegistry,
};
pub use schema::{
    ConfigField,
    ConfigFieldType,
    ConfigSchema,
};
pub use types::{
    AvailablePipeline,
    BuildStatus,
    Change,
    Items,
    ServiceDescriptor,
    Settings,
    Tag,
    TagType,
    DEFAULT_UPDATE_INTERVAL_SECS,
};

#[macro_export]
macro_rules! register_plugin {
    ($plugin_type:ty) => {
        pub fn register(registry: &mut $crate::PluginRegistry) {
            registry.register(|| -> Box<dyn $crate::Plugin> {
                Box::new(<$plugin_type>::default())
            });
        }
    };
}
