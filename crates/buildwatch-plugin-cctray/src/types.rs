//! CCTray feed document types
//!
//! A feed looks like:
//!
//! ```xml
//! <Projects>
//!   <Project name="connectfour" activity="Sleeping" lastBuildStatus="Success"
//!            lastBuildLabel="build.1" lastBuildTime="2007-07-18T18:44:48"
//!            webUrl="http://build.example.com/connectfour"/>
//! </Projects>
//! ```

use buildwatch_plugin_api::{
    PluginError,
    PluginResult,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Projects {
    #[serde(rename = "Project", default)]
    pub projects: Vec<FeedProject>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FeedProject {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@activity", default)]
    pub activity: String,
    #[serde(rename = "@lastBuildStatus", default)]
    pub last_build_status: String,
    #[serde(rename = "@webUrl", default)]
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activity {
    Sleeping,
    Building,
    CheckingModifications,
    Unknown,
}

impl From<&str> for Activity {
    fn from(value: &str) -> Self {
        match value {
            "Sleeping" => Self::Sleeping,
            "Building" => Self::Building,
            "CheckingModifications" => Self::CheckingModifications,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LastBuildStatus {
    Success,
    Failure,
    Exception,
    Unknown,
}

impl From<&str> for LastBuildStatus {
    fn from(value: &str) -> Self {
        match value {
            "Success" => Self::Success,
            "Failure" => Self::Failure,
            "Exception" => Self::Exception,
            _ => Self::Unknown,
        }
    }
}

impl FeedProject {
    pub fn activity(&self) -> Activity {
        Activity::from(self.activity.as_str())
    }

    pub fn last_build_status(&self) -> LastBuildStatus {
        LastBuildStatus::from(self.last_build_status.as_str())
    }
}

pub(crate) fn parse_feed(xml: &str) -> PluginResult<Vec<FeedProject>> {
    let document: Projects = quick_xml::de::from_str(xml)
        .map_err(|e| PluginError::SerializationError(format!("Invalid CCTray feed: {e}")))?;
    Ok(document.projects)
}
