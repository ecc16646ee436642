use buildwatch_plugin_api::{
    PluginError,
    PluginResult,
    Settings,
};

/// A configured `org/pipeline` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectRef {
    pub org: String,
    pub pipeline: String,
}

impl ProjectRef {
    pub fn id(&self) -> String {
        format!("{}/{}", self.org, self.pipeline)
    }
}

/// Splits a project on its first `/`.
pub(crate) fn parse_project(project: &str) -> PluginResult<ProjectRef> {
    let trimmed = project.trim();
    match trimmed.split_once('/') {
        Some((org, pipeline)) if !org.is_empty() && !pipeline.is_empty() => Ok(ProjectRef {
            org: org.to_string(),
            pipeline: pipeline.to_string(),
        }),
        _ => Err(PluginError::InvalidConfig(format!(
            "Project '{project}' is not in org/pipeline form"
        ))),
    }
}

pub(crate) fn parse_projects(settings: &Settings) -> PluginResult<Vec<ProjectRef>> {
    settings
        .projects
        .iter()
        .map(|project| parse_project(project))
        .collect()
}

pub(crate) fn require_token(settings: &Settings) -> PluginResult<&str> {
    let token = settings.token.trim();
    if token.is_empty() {
        return Err(PluginError::InvalidConfig(
            "Missing Buildkite API token".to_string(),
        ));
    }
    Ok(token)
}
