//! HTTP client and API methods for Buildkite

use async_trait::async_trait;
use buildwatch_plugin_api::{
    PluginError,
    PluginResult,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types;

pub(crate) const BASE_URL: &str = "https://api.buildkite.com/v2";

const PER_PAGE: usize = 100;
const MAX_PAGES: usize = 10;

/// The Buildkite requests the lister and resolver depend on
#[async_trait]
pub(crate) trait BuildkiteApi: Send + Sync {
    /// Organizations visible to the token
    async fn organizations(&self) -> PluginResult<Vec<types::Organization>>;

    /// All pipelines behind an organization's `pipelines_url`
    async fn pipelines(&self, pipelines_url: &str) -> PluginResult<Vec<types::Pipeline>>;

    /// Most recent build in any state, `None` if the pipeline never ran
    async fn latest_build(&self, org: &str, pipeline: &str) -> PluginResult<Option<types::Build>>;

    /// Most recent build in a terminal state
    async fn latest_finished_build(
        &self, org: &str, pipeline: &str,
    ) -> PluginResult<Option<types::Build>>;
}

/// Buildkite REST client; the bearer token lives in the client's default headers
pub(crate) struct BuildkiteClient {
    client: Client,
    base_url: String,
}

impl BuildkiteClient {
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> PluginResult<T> {
        tracing::debug!(url, "GET {what}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PluginError::NetworkError(format!("Failed to fetch {what}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Buildkite request failed");
            return Err(PluginError::from_http_status(status.as_u16(), what));
        }

        response
            .json()
            .await
            .map_err(|e| PluginError::SerializationError(format!("Failed to parse {what}: {e}")))
    }

    async fn first_build(&self, url: &str, what: &str) -> PluginResult<Option<types::Build>> {
        let builds: Vec<types::Build> = self.get_json(url, what).await?;
        Ok(builds.into_iter().next())
    }
}

fn page_url(base: &str, page: usize) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}page={page}&per_page={PER_PAGE}")
}

#[async_trait]
impl BuildkiteApi for BuildkiteClient {
    async fn organizations(&self) -> PluginResult<Vec<types::Organization>> {
        let url = format!("{}/organizations", self.base_url);
        self.get_json(&url, "organizations").await
    }

    async fn pipelines(&self, pipelines_url: &str) -> PluginResult<Vec<types::Pipeline>> {
        let mut all_pipelines = Vec::new();

        for page in 1..=MAX_PAGES {
            let url = page_url(pipelines_url, page);
            let pipelines: Vec<types::Pipeline> = self.get_json(&url, "pipelines").await?;
            let count = pipelines.len();
            all_pipelines.extend(pipelines);

            if count < PER_PAGE {
                break;
            }
            if page == MAX_PAGES {
                tracing::warn!(
                    url = %pipelines_url,
                    pages = MAX_PAGES,
                    "Pipeline listing truncated at the page limit"
                );
            }
        }

        Ok(all_pipelines)
    }

    async fn latest_build(&self, org: &str, pipeline: &str) -> PluginResult<Option<types::Build>> {
        let url = format!(
            "{}/organizations/{org}/pipelines/{pipeline}/builds?per_page=1",
            self.base_url
        );
        self.first_build(&url, &format!("latest build of {org}/{pipeline}"))
            .await
    }

    async fn latest_finished_build(
        &self, org: &str, pipeline: &str,
    ) -> PluginResult<Option<types::Build>> {
        let url = format!(
            "{}/organizations/{org}/pipelines/{pipeline}/builds?per_page=1&state=finished",
            self.base_url
        );
        self.first_build(&url, &format!("latest finished build of {org}/{pipeline}"))
            .await
    }
}
