//! Configured services and the one-shot and polling runs over them

use std::future::Future;
use std::time::Duration;

use anyhow::{
    bail,
    Context,
};
use buildwatch_plugin_api::{
    AvailablePipeline,
    BuildStatus,
    Items,
    Plugin,
    PluginRegistry,
    PluginResult,
};
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;

use crate::config::{
    BuildwatchConfig,
    ServiceConfig,
};

const MIN_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// An initialized plugin bound to one `[services.<id>]` table
pub struct Service {
    pub id: String,
    pub provider_type: String,
    pub update_interval: Duration,
    plugin: Box<dyn Plugin>,
}

impl Service {
    pub fn from_config(
        id: &str, config: &ServiceConfig, registry: &PluginRegistry,
    ) -> PluginResult<Self> {
        let mut plugin = registry.create(&config.provider_type)?;
        plugin.initialize(config.settings.clone())?;

        Ok(Self {
            id: id.to_string(),
            provider_type: config.provider_type.clone(),
            update_interval: config.update_interval().max(MIN_UPDATE_INTERVAL),
            plugin,
        })
    }

    pub async fn list(&self) -> ServiceReport<AvailablePipeline> {
        let result = self.plugin.fetch_available_pipelines().await;
        ServiceReport::new(self, result)
    }

    pub async fn status(&self) -> ServiceReport<BuildStatus> {
        let result = self.plugin.fetch_latest().await;
        ServiceReport::new(self, result)
    }
}

/// One JSON line of output: the service's items, or the error that replaced them
#[derive(Debug, Serialize)]
pub struct ServiceReport<T> {
    pub service: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ServiceReport<T> {
    fn new(service: &Service, result: PluginResult<Items<T>>) -> Self {
        let (items, error) = match result {
            Ok(items) => {
                tracing::debug!(
                    service = %service.id,
                    count = items.len(),
                    "Fetched items"
                );
                (Some(items.items), None)
            }
            Err(e) => {
                tracing::error!(service = %service.id, error = %e, "Fetch failed");
                (None, Some(e.to_string()))
            }
        };

        Self {
            service: service.id.clone(),
            provider_type: service.provider_type.clone(),
            items,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Initializes the configured services in file order, optionally just one of them
pub fn build_services(
    config: &BuildwatchConfig, registry: &PluginRegistry, only: Option<&str>,
) -> anyhow::Result<Vec<Service>> {
    if let Some(id) = only {
        if !config.services.contains_key(id) {
            bail!(
                "No service named '{id}'. Configured services: {:?}",
                config.services.keys().collect::<Vec<_>>()
            );
        }
    }

    config
        .services
        .iter()
        .filter(|(id, _)| only.is_none_or(|only| only == id.as_str()))
        .map(|(id, service)| {
            Service::from_config(id, service, registry)
                .with_context(|| format!("Failed to initialize service '{id}'"))
        })
        .collect()
}

pub async fn list_all(services: &[Service]) -> Vec<ServiceReport<AvailablePipeline>> {
    join_all(services.iter().map(Service::list)).await
}

pub async fn status_all(services: &[Service]) -> Vec<ServiceReport<BuildStatus>> {
    join_all(services.iter().map(Service::status)).await
}

/// Polls every service's status on its own interval until `shutdown` resolves.
///
/// The first poll of each service happens immediately. A failed poll is
/// reported and the service waits for its next tick.
pub async fn watch<F>(
    services: Vec<Service>, reports: mpsc::UnboundedSender<ServiceReport<BuildStatus>>,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    let mut tasks = JoinSet::new();
    for service in services {
        tracing::info!(
            service = %service.id,
            interval_secs = service.update_interval.as_secs(),
            "Watching service"
        );
        tasks.spawn(poll_service(service, reports.clone()));
    }
    drop(reports);

    tokio::select! {
        _ = shutdown => tracing::info!("Stopping watch"),
        _ = async { while tasks.join_next().await.is_some() {} } => {}
    }

    tasks.shutdown().await;
}

async fn poll_service(
    service: Service, reports: mpsc::UnboundedSender<ServiceReport<BuildStatus>>,
) {
    let mut interval = tokio::time::interval(service.update_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if reports.send(service.status().await).is_err() {
            break;
        }
    }
}
