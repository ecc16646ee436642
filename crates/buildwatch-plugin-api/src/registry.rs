use std::collections::BTreeMap;

use crate::error::{
    PluginError,
    PluginResult,
};
use crate::plugin::{
    Plugin,
    PluginMetadata,
};
use crate::types::ServiceDescriptor;

/// Builds a fresh, uninitialized plugin instance
pub type PluginFactory = fn() -> Box<dyn Plugin>;

struct RegisteredPlugin {
    metadata: PluginMetadata,
    factory: PluginFactory,
}

/// Plugin registry - maps provider types to plugin factories
///
/// Every configured service gets its own instance from [`PluginRegistry::create`],
/// so two Buildkite services with different tokens never share state.
pub struct PluginRegistry {
    plugins: BTreeMap<String, RegisteredPlugin>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: BTreeMap::new(),
        }
    }

    /// Register a plugin factory under the provider type it reports
    pub fn register(&mut self, factory: PluginFactory) {
        let metadata = factory().metadata().clone();
        self.plugins.insert(
            metadata.provider_type.clone(),
            RegisteredPlugin { metadata, factory },
        );
    }

    /// Create an uninitialized plugin for a provider type
    pub fn create(&self, provider_type: &str) -> PluginResult<Box<dyn Plugin>> {
        self.plugins
            .get(provider_type)
            .map(|registered| (registered.factory)())
            .ok_or_else(|| PluginError::ProviderNotSupported(provider_type.to_string()))
    }

    /// Get metadata by provider type
    pub fn metadata(&self, provider_type: &str) -> Option<&PluginMetadata> {
        self.plugins.get(provider_type).map(|r| &r.metadata)
    }

    /// Descriptors of all registered plugins, ordered by provider type
    pub fn descriptors(&self) -> Vec<ServiceDescriptor> {
        self.plugins
            .values()
            .map(|r| r.metadata.descriptor())
            .collect()
    }

    /// Check if a provider type is registered
    pub fn is_registered(&self, provider_type: &str) -> bool {
        self.plugins.contains_key(provider_type)
    }

    /// Get all registered provider types
    pub fn provider_types(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    /// Get count of registered plugins
    pub fn count(&self) -> usize {
        self.plugins.len()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        AvailablePipeline,
        BuildStatus,
        ConfigSchema,
        Items,
        PluginCapabilities,
        Settings,
    };

    struct EchoPlugin {
        metadata: PluginMetadata,
        settings: Settings,
    }

    impl Default for EchoPlugin {
        fn default() -> Self {
            Self {
                metadata: PluginMetadata {
                    name: "Echo".to_string(),
                    provider_type: "echo".to_string(),
                    url_hint: String::new(),
                    version: "0.1.0".to_string(),
                    description: "Echoes configured projects".to_string(),
                    icon: None,
                    default_config: Settings::default(),
                    config_schema: ConfigSchema::new(),
                    capabilities: PluginCapabilities::default(),
                },
                settings: Settings::default(),
            }
        }
    }

    #[async_trait]
    impl Plugin for EchoPlugin {
        fn metadata(&self) -> &PluginMetadata {
            &self.metadata
        }

        fn initialize(&mut self, settings: Settings) -> PluginResult<()> {
            self.settings = settings;
            Ok(())
        }

        async fn fetch_available_pipelines(&self) -> PluginResult<Items<AvailablePipeline>> {
            Ok(Items::empty())
        }

        async fn fetch_latest(&self) -> PluginResult<Items<BuildStatus>> {
            Ok(self
                .settings
                .projects
                .iter()
                .map(|p| BuildStatus {
                    id: p.clone(),
                    name: p.clone(),
                    ..Default::default()
                })
                .collect::<Vec<_>>()
                .into())
        }
    }

    crate::register_plugin!(EchoPlugin);

    #[test]
    fn test_registry_creation() {
        let registry = PluginRegistry::new();
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_register_macro_and_descriptors() {
        let mut registry = PluginRegistry::new();
        register(&mut registry);

        assert!(registry.is_registered("echo"));
        assert_eq!(registry.provider_types(), vec!["echo".to_string()]);
        assert_eq!(registry.descriptors()[0].type_name, "Echo");
        assert_eq!(registry.metadata("echo").unwrap().version, "0.1.0");
    }

    #[test]
    fn test_create_unknown_provider() {
        let registry = PluginRegistry::new();
        assert!(matches!(
            registry.create("jenkins"),
            Err(PluginError::ProviderNotSupported(t)) if t == "jenkins"
        ));
    }

    #[tokio::test]
    async fn test_created_instances_are_independent() {
        let mut registry = PluginRegistry::new();
        register(&mut registry);

        let mut first = registry.create("echo").unwrap();
        let second = registry.create("echo").unwrap();
        first
            .initialize(Settings {
                projects: vec!["a".to_string()],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(first.fetch_latest().await.unwrap().len(), 1);
        assert!(second.fetch_latest().await.unwrap().is_empty());
    }
}
