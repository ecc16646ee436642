use buildwatch_plugin_api::*;

pub const PROVIDER_TYPE: &str = "buildkite";

pub fn create_metadata() -> PluginMetadata {
    PluginMetadata {
        name: "Buildkite".to_string(),
        provider_type: PROVIDER_TYPE.to_string(),
        url_hint: "Not needed, builds are read from api.buildkite.com".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Monitor the latest builds of Buildkite pipelines".to_string(),
        icon: Some("https://cdn.simpleicons.org/buildkite/14CC80".to_string()),
        default_config: Settings {
            base_url: PROVIDER_TYPE.to_string(),
            ..Default::default()
        },
        config_schema: create_config_schema(),
        capabilities: create_capabilities(),
    }
}

fn create_config_schema() -> ConfigSchema {
    ConfigSchema::new()
        .add_field(ConfigField {
            key: "token".to_string(),
            label: "API Token".to_string(),
            description: Some(
                "Buildkite API Access Token with read_builds, read_pipelines, and read_organizations scopes"
                    .to_string(),
            ),
            field_type: ConfigFieldType::Password,
            required: true,
            default_value: None,
            options: None,
            validation_regex: None,
            validation_message: None,
        })
        .add_field(ConfigField {
            key: "projects".to_string(),
            label: "Pipelines".to_string(),
            description: Some("Pipelines to monitor, as org/pipeline".to_string()),
            field_type: ConfigFieldType::MultiSelect,
            required: false,
            default_value: None,
            options: None,
            validation_regex: Some(r"^[^/]+/.+$".to_string()),
            validation_message: Some("Use the org/pipeline form".to_string()),
        })
}

fn create_capabilities() -> PluginCapabilities {
    PluginCapabilities {
        pipelines: true,
        latest_builds: true,
        requires_url: false,
    }
}
