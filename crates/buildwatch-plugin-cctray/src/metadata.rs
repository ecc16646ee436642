use buildwatch_plugin_api::*;

pub const PROVIDER_TYPE: &str = "cctray";

pub fn create_metadata() -> PluginMetadata {
    PluginMetadata {
        name: "CCTray Generic".to_string(),
        provider_type: PROVIDER_TYPE.to_string(),
        url_hint: "URL of the cctray XML feed, e.g. http://ci.example.com/cc.xml".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Monitor any server publishing a CCTray XML feed".to_string(),
        icon: None,
        default_config: Settings {
            base_url: PROVIDER_TYPE.to_string(),
            ..Default::default()
        },
        config_schema: create_config_schema(),
        capabilities: create_capabilities(),
    }
}

/// Settings fields shared by every CCTray-based service
pub fn create_config_schema() -> ConfigSchema {
    ConfigSchema::new()
        .add_field(ConfigField {
            key: "url".to_string(),
            label: "Server URL".to_string(),
            description: Some("Base URL of the CI server".to_string()),
            field_type: ConfigFieldType::Text,
            required: true,
            default_value: None,
            options: None,
            validation_regex: Some(r"^https?://".to_string()),
            validation_message: Some("URL must start with http:// or https://".to_string()),
        })
        .add_field(ConfigField {
            key: "username".to_string(),
            label: "Username".to_string(),
            description: Some("Only needed when the feed requires basic auth".to_string()),
            field_type: ConfigFieldType::Text,
            required: false,
            default_value: None,
            options: None,
            validation_regex: None,
            validation_message: None,
        })
        .add_field(ConfigField {
            key: "password".to_string(),
            label: "Password".to_string(),
            description: None,
            field_type: ConfigFieldType::Password,
            required: false,
            default_value: None,
            options: None,
            validation_regex: None,
            validation_message: None,
        })
        .add_field(ConfigField {
            key: "projects".to_string(),
            label: "Projects".to_string(),
            description: Some("Feed projects to monitor".to_string()),
            field_type: ConfigFieldType::MultiSelect,
            required: false,
            default_value: None,
            options: None,
            validation_regex: None,
            validation_message: None,
        })
        .add_field(ConfigField {
            key: "updateInterval".to_string(),
            label: "Update interval (seconds)".to_string(),
            description: None,
            field_type: ConfigFieldType::Number,
            required: false,
            default_value: Some(serde_json::json!(DEFAULT_UPDATE_INTERVAL_SECS)),
            options: None,
            validation_regex: None,
            validation_message: None,
        })
}

fn create_capabilities() -> PluginCapabilities {
    PluginCapabilities {
        pipelines: true,
        latest_builds: true,
        requires_url: true,
    }
}
