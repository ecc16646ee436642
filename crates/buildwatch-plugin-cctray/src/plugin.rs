//! CCTray plugin implementation

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use buildwatch_plugin_api::*;

use crate::{
    client,
    config,
    mapper,
    metadata,
};

/// Plugin for servers that publish a CCTray XML feed
///
/// Server-specific plugins wrap this one through [`CctrayPlugin::with_metadata`],
/// supplying their own descriptor and feed document name.
pub struct CctrayPlugin {
    metadata: PluginMetadata,
    feed_location: String,
    client: Option<client::CctrayClient>,
    projects: Vec<String>,
}

impl Default for CctrayPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl CctrayPlugin {
    pub fn new() -> Self {
        Self::with_metadata(metadata::create_metadata(), "")
    }

    pub fn with_metadata(metadata: PluginMetadata, feed_location: impl Into<String>) -> Self {
        Self {
            metadata,
            feed_location: feed_location.into(),
            client: None,
            projects: Vec::new(),
        }
    }

    /// Document name appended to the server URL, empty for the URL itself
    pub fn feed_location(&self) -> &str {
        &self.feed_location
    }

    fn client(&self) -> PluginResult<&client::CctrayClient> {
        self.client
            .as_ref()
            .ok_or_else(|| PluginError::Internal("Plugin not initialized".to_string()))
    }
}

#[async_trait]
impl Plugin for CctrayPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn initialize(&mut self, settings: Settings) -> PluginResult<()> {
        let feed_url = config::feed_url(&settings.url, &self.feed_location)?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| PluginError::Internal(format!("Failed to build HTTP client: {e}")))?;

        let client =
            client::CctrayClient::new(http_client, feed_url, config::credentials(&settings));
        tracing::debug!(
            provider = %self.metadata.provider_type,
            feed = client.feed_url(),
            "Initialized CCTray plugin"
        );

        self.client = Some(client);
        self.projects = config::parse_projects(&settings);

        Ok(())
    }

    async fn fetch_available_pipelines(&self) -> PluginResult<Items<AvailablePipeline>> {
        let projects = self.client()?.fetch_projects().await?;
        Ok(projects
            .iter()
            .map(mapper::map_available)
            .collect::<Vec<_>>()
            .into())
    }

    async fn fetch_latest(&self) -> PluginResult<Items<BuildStatus>> {
        let client = self.client()?;
        if self.projects.is_empty() {
            return Ok(Items::empty());
        }

        let feed = client.fetch_projects().await?;
        let by_name: HashMap<&str, _> = feed.iter().map(|p| (p.name.as_str(), p)).collect();

        self.projects
            .iter()
            .map(|name| {
                by_name
                    .get(name.as_str())
                    .map(|project| mapper::map_status(project))
                    .ok_or_else(|| {
                        PluginError::PipelineNotFound(format!(
                            "{name} is not listed in {}",
                            client.feed_url()
                        ))
                    })
            })
            .collect::<PluginResult<Vec<_>>>()
            .map(Items::from)
    }
}
