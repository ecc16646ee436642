//! API response types for Buildkite API
//!
//! These types are internal implementation details for deserializing
//! Buildkite API responses.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Organization {
    pub slug: String,
    pub name: String,
    pub pipelines_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Pipeline {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub archived_at: Option<String>,
}

/// Build states as reported by the Buildkite REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum BuildState {
    Running,
    Started,
    Scheduled,
    Passed,
    Failed,
    Blocked,
    Canceled,
    Canceling,
    Skipped,
    NotRun,
    Creating,
    Waiting,
    Failing,
    #[serde(other)]
    Unknown,
}

impl BuildState {
    pub fn is_running(self) -> bool {
        matches!(
            self,
            Self::Running | Self::Started | Self::Failing | Self::Canceling
        )
    }

    /// Queued, blocked on a manual step, or in a state this client does not know yet.
    pub fn is_waiting(self) -> bool {
        matches!(
            self,
            Self::Scheduled | Self::Creating | Self::Waiting | Self::Blocked | Self::Unknown
        )
    }

    /// Terminal states; their outcome decides whether the pipeline is broken.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            Self::Passed | Self::Failed | Self::Canceled | Self::Skipped | Self::NotRun
        )
    }

    /// Every finished state except `passed`.
    pub fn is_broken(self) -> bool {
        self.is_finished() && self != Self::Passed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Build {
    pub number: i64,
    pub state: BuildState,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pipeline: Option<BuildPipeline>,
    #[serde(default)]
    pub author: Option<Person>,
    #[serde(default)]
    pub creator: Option<Person>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BuildPipeline {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Person {
    #[serde(default)]
    pub name: String,
}
