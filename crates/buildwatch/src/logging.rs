use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const DEFAULT_LOG_FILTER: &str = "buildwatch=info,buildwatch_plugin_buildkite=info,buildwatch_plugin_cctray=info,buildwatch_plugin_cruisecontrol=info";

pub const VERBOSE_LOG_FILTER: &str = "buildwatch=debug,buildwatch_plugin_buildkite=debug,buildwatch_plugin_cctray=debug,buildwatch_plugin_cruisecontrol=debug";

pub fn init(verbose: bool) {
    if verbose {
        init_with_default(VERBOSE_LOG_FILTER);
    } else {
        init_with_default(DEFAULT_LOG_FILTER);
    }
}

/// Logs go to stderr; stdout carries the JSON results.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
