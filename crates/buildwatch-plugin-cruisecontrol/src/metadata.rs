use buildwatch_plugin_api::*;

pub const PROVIDER_TYPE: &str = "cruisecontrol";

/// Feed document served next to the CruiseControl dashboard
pub const FEED_LOCATION: &str = "cctray.xml";

pub const DEFAULT_UPDATE_INTERVAL: u64 = 60;

pub fn create_metadata() -> PluginMetadata {
    PluginMetadata {
        name: "CruiseControl".to_string(),
        provider_type: PROVIDER_TYPE.to_string(),
        url_hint: "URL, e.g. http://cruisecontrol.instance.com/".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Monitor CruiseControl projects through the cctray.xml feed".to_string(),
        icon: None,
        default_config: Settings {
            base_url: PROVIDER_TYPE.to_string(),
            update_interval: DEFAULT_UPDATE_INTERVAL,
            ..Default::default()
        },
        config_schema: buildwatch_plugin_cctray::create_config_schema(),
        capabilities: PluginCapabilities {
            pipelines: true,
            latest_builds: true,
            requires_url: true,
        },
    }
}
