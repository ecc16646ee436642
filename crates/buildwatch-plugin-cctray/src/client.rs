//! HTTP client for CCTray feeds

use buildwatch_plugin_api::{
    PluginError,
    PluginResult,
};
use reqwest::Client;

use crate::types::{
    self,
    FeedProject,
};

pub(crate) struct CctrayClient {
    client: Client,
    feed_url: String,
    credentials: Option<(String, String)>,
}

impl CctrayClient {
    pub fn new(client: Client, feed_url: String, credentials: Option<(String, String)>) -> Self {
        Self {
            client,
            feed_url,
            credentials,
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Downloads and parses the feed
    pub async fn fetch_projects(&self) -> PluginResult<Vec<FeedProject>> {
        tracing::debug!(url = %self.feed_url, "GET CCTray feed");

        let mut request = self.client.get(&self.feed_url);
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, Some(password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| PluginError::NetworkError(format!("Failed to fetch CCTray feed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %self.feed_url,
                status = status.as_u16(),
                "CCTray feed request failed"
            );
            return Err(PluginError::from_http_status(status.as_u16(), "CCTray feed"));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PluginError::NetworkError(format!("Failed to read CCTray feed: {e}")))?;

        types::parse_feed(&body)
    }
}
