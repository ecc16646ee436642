use buildwatch_plugin_api::{
    AvailablePipeline,
    BuildStatus,
    Change,
    Tag,
};

use crate::config::ProjectRef;
use crate::types::{
    self,
    BuildState,
};

pub(crate) fn map_pipeline(
    org: &types::Organization, pipeline: types::Pipeline,
) -> AvailablePipeline {
    AvailablePipeline {
        id: format!("{}/{}", org.slug, pipeline.slug),
        name: pipeline.name,
        group: Some(org.name.clone()),
        is_disabled: pipeline.archived_at.is_some(),
    }
}

/// Sorts one organization's pipelines by slug and maps them.
pub(crate) fn map_org_pipelines(
    org: &types::Organization, mut pipelines: Vec<types::Pipeline>,
) -> Vec<AvailablePipeline> {
    pipelines.sort_by(|a, b| a.slug.cmp(&b.slug));
    pipelines
        .into_iter()
        .map(|pipeline| map_pipeline(org, pipeline))
        .collect()
}

fn map_tags(state: BuildState) -> Vec<Tag> {
    match state {
        BuildState::Canceled | BuildState::Canceling => vec![Tag::warning("Canceled")],
        BuildState::Blocked => vec![Tag::info("Blocked")],
        _ => Vec::new(),
    }
}

fn map_changes(build: &types::Build) -> Vec<Change> {
    build
        .author
        .as_ref()
        .or(build.creator.as_ref())
        .filter(|person| !person.name.is_empty())
        .map(|person| Change {
            name: person.name.clone(),
            message: build.message.clone(),
        })
        .into_iter()
        .collect()
}

pub(crate) fn map_build(build: &types::Build, project: &ProjectRef) -> BuildStatus {
    let state = build.state;
    BuildStatus {
        id: project.id(),
        name: build
            .pipeline
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| project.pipeline.clone()),
        group: Some(project.org.clone()),
        web_url: build.web_url.clone(),
        is_running: state.is_running(),
        is_waiting: state.is_waiting(),
        is_broken: state.is_broken(),
        tags: map_tags(state),
        changes: map_changes(build),
    }
}

/// Keeps the in-flight flags of `latest` and takes `isBroken` from the most
/// recent finished build; no finished build means nothing has broken yet.
pub(crate) fn merge_finished(latest: BuildStatus, finished: Option<&types::Build>) -> BuildStatus {
    BuildStatus {
        is_broken: finished
            .map(|build| build.state.is_broken())
            .unwrap_or(false),
        ..latest
    }
}

#[cfg(test)]
mod tests {
    use buildwatch_plugin_api::TagType;

    use super::*;

    fn org() -> types::Organization {
        types::Organization {
            slug: "org".to_string(),
            name: "org_name".to_string(),
            pipelines_url: "https://api.buildkite.com/v2/organizations/org/pipelines".to_string(),
        }
    }

    fn pipeline(slug: &str, name: &str) -> types::Pipeline {
        types::Pipeline {
            slug: slug.to_string(),
            name: name.to_string(),
            archived_at: None,
        }
    }

    fn build(state: BuildState) -> types::Build {
        types::Build {
            number: 7,
            state,
            web_url: Some("https://buildkite.com/org/pipeline/builds/7".to_string()),
            message: Some("Bump deps".to_string()),
            pipeline: Some(types::BuildPipeline {
                name: "Pipeline".to_string(),
            }),
            author: None,
            creator: Some(types::Person {
                name: "Ada".to_string(),
            }),
        }
    }

    fn project() -> ProjectRef {
        ProjectRef {
            org: "org".to_string(),
            pipeline: "pipeline".to_string(),
        }
    }

    #[test]
    fn test_map_org_pipelines_sorted_by_slug() {
        let items = map_org_pipelines(
            &org(),
            vec![pipeline("slug2", "pipeline2"), pipeline("slug1", "pipeline1")],
        );

        assert_eq!(
            items,
            vec![
                AvailablePipeline {
                    id: "org/slug1".to_string(),
                    name: "pipeline1".to_string(),
                    group: Some("org_name".to_string()),
                    is_disabled: false,
                },
                AvailablePipeline {
                    id: "org/slug2".to_string(),
                    name: "pipeline2".to_string(),
                    group: Some("org_name".to_string()),
                    is_disabled: false,
                },
            ]
        );
    }

    #[test]
    fn test_archived_pipeline_is_disabled() {
        let mut archived = pipeline("old", "Old");
        archived.archived_at = Some("2024-01-01T00:00:00.000Z".to_string());

        assert!(map_pipeline(&org(), archived).is_disabled);
    }

    #[test]
    fn test_map_running_build() {
        let status = map_build(&build(BuildState::Running), &project());

        assert_eq!(status.id, "org/pipeline");
        assert_eq!(status.name, "Pipeline");
        assert!(status.is_running);
        assert!(!status.is_waiting);
        assert!(!status.is_broken);
    }

    #[test]
    fn test_map_scheduled_build() {
        let status = map_build(&build(BuildState::Scheduled), &project());

        assert!(!status.is_running);
        assert!(status.is_waiting);
    }

    #[test]
    fn test_map_finished_builds() {
        assert!(!map_build(&build(BuildState::Passed), &project()).is_broken);
        assert!(map_build(&build(BuildState::Failed), &project()).is_broken);

        let canceled = map_build(&build(BuildState::Canceled), &project());
        assert!(canceled.is_broken);
        assert_eq!(canceled.tags[0].name, "Canceled");
        assert_eq!(canceled.tags[0].tag_type, TagType::Warning);
    }

    #[test]
    fn test_map_skipped_and_not_run_builds_are_broken() {
        for state in [BuildState::Skipped, BuildState::NotRun] {
            let status = map_build(&build(state), &project());
            assert!(status.is_broken, "{state:?}");
            assert!(!status.is_running, "{state:?}");
            assert!(status.tags.is_empty(), "{state:?}");
        }
    }

    #[test]
    fn test_map_blocked_build() {
        let blocked = map_build(&build(BuildState::Blocked), &project());

        assert!(blocked.is_waiting);
        assert!(!blocked.is_broken);
        assert_eq!(blocked.tags, vec![Tag::info("Blocked")]);
        assert_eq!(blocked.tags[0].tag_type, TagType::Info);
    }

    #[test]
    fn test_map_started_build() {
        let started = map_build(&build(BuildState::Started), &project());

        assert!(started.is_running);
        assert!(!started.is_waiting);
        assert!(!started.is_broken);
    }

    #[test]
    fn test_map_build_falls_back_to_project_name_and_creator() {
        let mut anonymous = build(BuildState::Passed);
        anonymous.pipeline = None;
        let status = map_build(&anonymous, &project());

        assert_eq!(status.name, "pipeline");
        assert_eq!(
            status.changes,
            vec![Change {
                name: "Ada".to_string(),
                message: Some("Bump deps".to_string()),
            }]
        );
    }

    #[test]
    fn test_merge_finished_takes_broken_from_finished_build() {
        let running = map_build(&build(BuildState::Running), &project());
        let merged = merge_finished(running, Some(&build(BuildState::Failed)));

        assert!(merged.is_running);
        assert!(merged.is_broken);

        let waiting = map_build(&build(BuildState::Scheduled), &project());
        let merged = merge_finished(waiting, None);
        assert!(merged.is_waiting);
        assert!(!merged.is_broken);
    }
}
