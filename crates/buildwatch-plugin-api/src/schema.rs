use serde::{
    Deserialize,
    Serialize,
};

/// Configuration field type for schema-based UI generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfigFieldType {
    /// Single-line text input
    Text,
    /// Password input (hidden)
    Password,
    /// Multiple selection, options come from the plugin's pipeline listing
    MultiSelect,
    /// Number input
    Number,
}

/// A single configuration field definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigField {
    /// Field key (matches the camelCase name in `Settings`)
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Field description/help text
    pub description: Option<String>,
    /// Field type
    pub field_type: ConfigFieldType,
    /// Whether the field is required
    pub required: bool,
    /// Default value (as JSON)
    pub default_value: Option<serde_json::Value>,
    /// Fixed options for MultiSelect types
    pub options: Option<Vec<String>>,
    /// Validation regex (optional)
    pub validation_regex: Option<String>,
    /// Validation error message
    pub validation_message: Option<String>,
}

/// Complete configuration schema for a plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    /// Schema fields
    pub fields: Vec<ConfigField>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn add_field(mut self, field: ConfigField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, key: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn required_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key.as_str())
            .collect()
    }
}

impl Default for ConfigSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(key: &str, required: bool) -> ConfigField {
        ConfigField {
            key: key.to_string(),
            label: key.to_string(),
            description: None,
            field_type: ConfigFieldType::Text,
            required,
            default_value: None,
            options: None,
            validation_regex: None,
            validation_message: None,
        }
    }

    #[test]
    fn test_required_keys_keep_declaration_order() {
        let schema = ConfigSchema::new()
            .add_field(field("url", true))
            .add_field(field("username", false))
            .add_field(field("projects", true));

        assert_eq!(schema.required_keys(), vec!["url", "projects"]);
        assert!(schema.field("username").is_some());
        assert!(schema.field("token").is_none());
    }
}
