use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::PluginResult;
use crate::schema::ConfigSchema;
use crate::types::*;

/// Plugin metadata - describes the plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Display name shown in the service picker (e.g., "CruiseControl")
    pub name: String,
    /// Plugin identifier, also the settings `baseUrl` (e.g., "cruisecontrol")
    pub provider_type: String,
    /// Hint shown under the URL field
    pub url_hint: String,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
    /// Plugin icon (URL or identifier)
    pub icon: Option<String>,
    /// Settings a freshly added service starts with
    pub default_config: Settings,
    /// Configuration schema for generic UI
    pub config_schema: ConfigSchema,
    /// Plugin capabilities
    pub capabilities: PluginCapabilities,
}

impl PluginMetadata {
    pub fn descriptor(&self) -> ServiceDescriptor {
        ServiceDescriptor {
            type_name: self.name.clone(),
            base_url: self.provider_type.clone(),
            url_hint: self.url_hint.clone(),
            default_config: self.default_config.clone(),
        }
    }
}

/// Plugin capabilities - what features the plugin supports
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PluginCapabilities {
    /// Supports listing pipelines for selection
    pub pipelines: bool,
    /// Supports fetching the latest status of selected pipelines
    pub latest_builds: bool,
    /// Requires a server URL in settings
    pub requires_url: bool,
}

/// Main plugin trait - all providers must implement this
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Get plugin metadata
    fn metadata(&self) -> &PluginMetadata;

    /// Initialize plugin with the service settings
    fn initialize(&mut self, settings: Settings) -> PluginResult<()>;

    /// Fetch pipelines the user can select from
    async fn fetch_available_pipelines(&self) -> PluginResult<Items<AvailablePipeline>>;

    /// Fetch the latest status of every configured project, in settings order
    async fn fetch_latest(&self) -> PluginResult<Items<BuildStatus>>;

    /// Get the provider type string
    fn provider_type(&self) -> &str {
        &self.metadata().provider_type
    }

    fn descriptor(&self) -> ServiceDescriptor {
        self.metadata().descriptor()
    }
}
