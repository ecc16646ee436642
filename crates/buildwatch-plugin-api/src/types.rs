use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 60;

fn default_update_interval() -> u64 {
    DEFAULT_UPDATE_INTERVAL_SECS
}

/// Per-service settings supplied by the dashboard.
///
/// One shape serves every provider; each plugin reads the fields it needs
/// (Buildkite: `token`, `projects`; CCTray: `url`, `username`, `password`,
/// `projects`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, alias = "base_url")]
    pub base_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default = "default_update_interval", alias = "update_interval")]
    pub update_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            name: String::new(),
            url: String::new(),
            username: String::new(),
            password: String::new(),
            token: String::new(),
            projects: Vec::new(),
            update_interval: DEFAULT_UPDATE_INTERVAL_SECS,
        }
    }
}

/// Result envelope handed to the dashboard: `{ "items": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// A pipeline offered for selection in the settings UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePipeline {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub is_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

impl Tag {
    pub fn warning(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_type: TagType::Warning,
        }
    }

    pub fn info(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_type: TagType::Info,
        }
    }
}

/// Who triggered a build and with which message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of one monitored project, as shown on a dashboard tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatus {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    pub is_running: bool,
    pub is_waiting: bool,
    pub is_broken: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<Change>,
}

/// Presentation data for the service picker in the settings UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub type_name: String,
    pub base_url: String,
    pub url_hint: String,
    pub default_config: Settings,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings: Settings =
            serde_json::from_value(json!({ "token": "t", "projects": ["org/p1"] })).unwrap();

        assert_eq!(settings.token, "t");
        assert_eq!(settings.projects, vec!["org/p1".to_string()]);
        assert_eq!(settings.update_interval, DEFAULT_UPDATE_INTERVAL_SECS);
        assert!(settings.url.is_empty());
    }

    #[test]
    fn test_settings_accepts_snake_case_aliases() {
        let settings: Settings =
            serde_json::from_value(json!({ "base_url": "cctray", "update_interval": 15 }))
                .unwrap();

        assert_eq!(settings.base_url, "cctray");
        assert_eq!(settings.update_interval, 15);
    }

    #[test]
    fn test_available_pipeline_serializes_camel_case() {
        let pipeline = AvailablePipeline {
            id: "org/slug".to_string(),
            name: "Pipeline".to_string(),
            group: Some("Org".to_string()),
            is_disabled: false,
        };

        assert_eq!(
            serde_json::to_value(&pipeline).unwrap(),
            json!({ "id": "org/slug", "name": "Pipeline", "group": "Org", "isDisabled": false })
        );
    }

    #[test]
    fn test_build_status_omits_empty_presentation_fields() {
        let status = BuildStatus {
            id: "org/p1".to_string(),
            name: "p1".to_string(),
            is_running: true,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(Items::new(vec![status])).unwrap(),
            json!({
                "items": [{
                    "id": "org/p1",
                    "name": "p1",
                    "isRunning": true,
                    "isWaiting": false,
                    "isBroken": false
                }]
            })
        );
    }

    #[test]
    fn test_tag_type_serialization() {
        assert_eq!(
            serde_json::to_value(Tag::warning("Canceled")).unwrap(),
            json!({ "name": "Canceled", "type": "warning" })
        );
    }
}
