//! CCTray plugin for Buildwatch
//!
//! Polls a CCTray XML feed (the de facto build status format published by
//! CruiseControl, Jenkins, GoCD, TeamCity and others) and maps its `Project`
//! entries to dashboard items.
//!
//! # Architecture
//!
//! - `plugin` - Main plugin implementation, reusable by server-specific plugins
//! - `client` - Feed download with optional basic auth
//! - `types` - Feed document types and parsing
//! - `mapper` - Data mapping utilities
//! - `config` - Settings parsing

mod client;
mod config;
mod mapper;
mod metadata;
mod plugin;
mod types;

pub use metadata::{
    create_config_schema,
    PROVIDER_TYPE,
};
// Re-export the plugin struct
pub use plugin::CctrayPlugin;

// Register plugin with the registry
buildwatch_plugin_api::register_plugin!(CctrayPlugin);
