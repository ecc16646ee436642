use std::path::PathBuf;
use std::time::Duration;

use buildwatch_plugin_api::Settings;
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildwatchConfig {
    /// Monitored services, keyed by the table name, in file order
    #[serde(default)]
    pub services: IndexMap<String, ServiceConfig>,
}

impl BuildwatchConfig {
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("buildwatch"))
            .unwrap_or_else(|| PathBuf::from(".buildwatch"))
            .join("config.toml")
    }

    /// Fills `name` and `baseUrl` from the table key and type when left out
    pub fn apply_defaults(&mut self) {
        for (id, service) in self.services.iter_mut() {
            if service.settings.name.trim().is_empty() {
                service.settings.name = id.clone();
            }
            if service.settings.base_url.trim().is_empty() {
                service.settings.base_url = service.provider_type.clone();
            }
        }
    }
}

/// One `[services.<id>]` table: the plugin type plus its settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(rename = "type", default)]
    pub provider_type: String,

    #[serde(flatten)]
    pub settings: Settings,
}

impl ServiceConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.settings.update_interval)
    }
}
