//! CruiseControl plugin implementation

use async_trait::async_trait;
use buildwatch_plugin_api::*;
use buildwatch_plugin_cctray::CctrayPlugin;

use crate::metadata;

/// CCTray plugin preconfigured for CruiseControl servers
pub struct CruiseControlPlugin {
    inner: CctrayPlugin,
}

impl Default for CruiseControlPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl CruiseControlPlugin {
    pub fn new() -> Self {
        Self {
            inner: CctrayPlugin::with_metadata(
                metadata::create_metadata(),
                metadata::FEED_LOCATION,
            ),
        }
    }

    /// Descriptor a dashboard uses to offer CruiseControl as a service type
    pub fn settings() -> ServiceDescriptor {
        metadata::create_metadata().descriptor()
    }
}

#[async_trait]
impl Plugin for CruiseControlPlugin {
    fn metadata(&self) -> &PluginMetadata {
        self.inner.metadata()
    }

    fn initialize(&mut self, settings: Settings) -> PluginResult<()> {
        self.inner.initialize(settings)
    }

    async fn fetch_available_pipelines(&self) -> PluginResult<Items<AvailablePipeline>> {
        self.inner.fetch_available_pipelines().await
    }

    async fn fetch_latest(&self) -> PluginResult<Items<BuildStatus>> {
        self.inner.fetch_latest().await
    }
}
