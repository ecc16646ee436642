use buildwatch_plugin_api::{
    AvailablePipeline,
    BuildStatus,
    Tag,
};

use crate::types::{
    Activity,
    FeedProject,
    LastBuildStatus,
};

pub(crate) fn map_available(project: &FeedProject) -> AvailablePipeline {
    AvailablePipeline {
        id: project.name.clone(),
        name: project.name.clone(),
        group: None,
        is_disabled: false,
    }
}

pub(crate) fn map_status(project: &FeedProject) -> BuildStatus {
    let activity = project.activity();
    let last_status = project.last_build_status();

    BuildStatus {
        id: project.name.clone(),
        name: project.name.clone(),
        group: None,
        web_url: project.web_url.clone(),
        is_running: activity == Activity::Building,
        is_waiting: activity == Activity::CheckingModifications,
        is_broken: matches!(
            last_status,
            LastBuildStatus::Failure | LastBuildStatus::Exception
        ),
        tags: match last_status {
            LastBuildStatus::Unknown => vec![Tag::warning("Unknown")],
            _ => Vec::new(),
        },
        changes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(activity: &str, status: &str) -> FeedProject {
        FeedProject {
            name: "cc-main".to_string(),
            activity: activity.to_string(),
            last_build_status: status.to_string(),
            web_url: Some("http://cc/cc-main".to_string()),
        }
    }

    #[test]
    fn test_map_available() {
        let item = map_available(&project("Sleeping", "Success"));
        assert_eq!(item.id, "cc-main");
        assert_eq!(item.name, "cc-main");
        assert!(!item.is_disabled);
    }

    #[test]
    fn test_map_building_after_failure() {
        let status = map_status(&project("Building", "Failure"));
        assert!(status.is_running);
        assert!(!status.is_waiting);
        assert!(status.is_broken);
        assert_eq!(status.web_url.as_deref(), Some("http://cc/cc-main"));
    }

    #[test]
    fn test_map_checking_modifications_is_waiting() {
        let status = map_status(&project("CheckingModifications", "Success"));
        assert!(!status.is_running);
        assert!(status.is_waiting);
        assert!(!status.is_broken);
    }

    #[test]
    fn test_map_exception_is_broken() {
        assert!(map_status(&project("Sleeping", "Exception")).is_broken);
    }

    #[test]
    fn test_map_unknown_status_is_tagged() {
        let status = map_status(&project("Sleeping", "Unknown"));
        assert!(!status.is_broken);
        assert_eq!(status.tags, vec![Tag::warning("Unknown")]);
    }
}
