use buildwatch_plugin_api::{
    PluginError,
    PluginResult,
    Settings,
};

/// Joins the server URL with the feed document name.
///
/// An empty location polls `url` as given; a URL that already names the
/// document is left alone.
pub(crate) fn feed_url(url: &str, feed_location: &str) -> PluginResult<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(PluginError::InvalidConfig("Missing server URL".to_string()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(PluginError::InvalidConfig(format!(
            "Server URL must start with http:// or https://: {url}"
        )));
    }

    let location = feed_location.trim_start_matches('/');
    if location.is_empty() {
        return Ok(url.to_string());
    }

    let base = url.trim_end_matches('/');
    if base.ends_with(location) {
        return Ok(base.to_string());
    }

    Ok(format!("{base}/{location}"))
}

/// Basic-auth credentials, present only when a username is configured
pub(crate) fn credentials(settings: &Settings) -> Option<(String, String)> {
    let username = settings.username.trim();
    if username.is_empty() {
        None
    } else {
        Some((username.to_string(), settings.password.clone()))
    }
}

pub(crate) fn parse_projects(settings: &Settings) -> Vec<String> {
    settings
        .projects
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
