//! Buildkite plugin for Buildwatch
//!
//! This plugin reads Buildkite's REST API to:
//! - List the pipelines of every organization visible to a token
//! - Resolve the latest status of selected `org/pipeline` projects, taking
//!   the broken flag from the last finished build while a newer build runs
//!
//! # Architecture
//!
//! The plugin is organized into several modules:
//! - `plugin` - Main plugin implementation
//! - `client` - HTTP client and API methods
//! - `builds` - Pipeline listing and latest-build resolution
//! - `types` - API response types
//! - `mapper` - Data mapping utilities
//! - `config` - Settings parsing
//!
//! # Example Usage
//!
//! ```no_run
//! use buildwatch_plugin_buildkite::BuildkitePlugin;
//! use buildwatch_plugin_api::PluginRegistry;
//!
//! let mut registry = PluginRegistry::new();
//! buildwatch_plugin_buildkite::register(&mut registry);
//! assert!(registry.is_registered("buildkite"));
//! # let _ = BuildkitePlugin::new();
//! ```

mod builds;
mod client;
mod config;
mod mapper;
mod metadata;
mod plugin;
mod types;

pub use metadata::PROVIDER_TYPE;
// Re-export the plugin struct
pub use plugin::BuildkitePlugin;

// Register plugin with the registry
buildwatch_plugin_api::register_plugin!(BuildkitePlugin);
