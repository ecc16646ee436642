//! CruiseControl plugin for Buildwatch
//!
//! CruiseControl publishes its build status as a CCTray feed at
//! `<server>/cctray.xml`, so this plugin is the CCTray plugin with
//! CruiseControl's descriptor and feed location.

mod metadata;
mod plugin;

pub use metadata::{
    DEFAULT_UPDATE_INTERVAL,
    FEED_LOCATION,
    PROVIDER_TYPE,
};
pub use plugin::CruiseControlPlugin;

buildwatch_plugin_api::register_plugin!(CruiseControlPlugin);
