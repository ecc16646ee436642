//! Buildkite plugin implementation

use std::time::Duration;

use async_trait::async_trait;
use buildwatch_plugin_api::*;
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    AUTHORIZATION,
};

use crate::config::ProjectRef;
use crate::{
    builds,
    client,
    config,
    metadata,
};

/// Buildkite plugin for listing pipelines and resolving their latest builds
pub struct BuildkitePlugin {
    metadata: PluginMetadata,
    client: Option<client::BuildkiteClient>,
    projects: Vec<ProjectRef>,
    api_url: String,
}

impl Default for BuildkitePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildkitePlugin {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
            client: None,
            projects: Vec::new(),
            api_url: client::BASE_URL.to_string(),
        }
    }

    /// Points the plugin at another Buildkite API root (tests, proxies)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn client(&self) -> PluginResult<&client::BuildkiteClient> {
        self.client
            .as_ref()
            .ok_or_else(|| PluginError::Internal("Plugin not initialized".to_string()))
    }
}

#[async_trait]
impl Plugin for BuildkitePlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn initialize(&mut self, settings: Settings) -> PluginResult<()> {
        let token = config::require_token(&settings)?;
        let projects = config::parse_projects(&settings)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| PluginError::InvalidConfig(format!("Invalid token format: {e}")))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| PluginError::Internal(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!(projects = projects.len(), "Initialized Buildkite plugin");

        self.client = Some(client::BuildkiteClient::with_base_url(
            http_client,
            self.api_url.clone(),
        ));
        self.projects = projects;

        Ok(())
    }

    async fn fetch_available_pipelines(&self) -> PluginResult<Items<AvailablePipeline>> {
        let client = self.client()?;
        builds::fetch_all_available_pipelines(client).await
    }

    async fn fetch_latest(&self) -> PluginResult<Items<BuildStatus>> {
        let client = self.client()?;
        builds::fetch_latest_builds(client, &self.projects).await
    }
}
