use buildwatch_plugin_api::{
    PluginRegistry,
    Settings,
};
use regex::Regex;

use super::schema::{
    BuildwatchConfig,
    ServiceConfig,
};

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<ConfigWarning>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: String, message: String, code: ConfigErrorCode) {
        self.errors.push(ConfigError {
            field,
            message,
            code,
        });
    }

    pub fn add_warning(&mut self, field: String, message: String) {
        self.warnings.push(ConfigWarning { field, message });
    }

    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
    pub code: ConfigErrorCode,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorCode {
    MissingRequired,
    InvalidValue,
    UnknownType,
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "MISSING_REQUIRED"),
            Self::InvalidValue => write!(f, "INVALID_VALUE"),
            Self::UnknownType => write!(f, "UNKNOWN_TYPE"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &BuildwatchConfig, registry: &PluginRegistry) -> ValidationResult {
        let mut result = ValidationResult::new();

        if config.services.is_empty() {
            result.add_warning("services".to_string(), "No services configured".to_string());
        }

        for (id, service) in &config.services {
            Self::validate_service(id, service, registry, &mut result);
        }

        result
    }

    fn validate_service(
        id: &str, service: &ServiceConfig, registry: &PluginRegistry, result: &mut ValidationResult,
    ) {
        let prefix = format!("services.{id}");

        if id.trim().is_empty() {
            result.add_error(
                "services".to_string(),
                "Service ID (table key) cannot be empty".to_string(),
                ConfigErrorCode::MissingRequired,
            );
        }

        if service.settings.update_interval == 0 {
            result.add_error(
                format!("{prefix}.updateInterval"),
                "Update interval must be at least one second".to_string(),
                ConfigErrorCode::InvalidValue,
            );
        }

        if service.provider_type.is_empty() {
            result.add_error(
                format!("{prefix}.type"),
                "Service type is required".to_string(),
                ConfigErrorCode::MissingRequired,
            );
            return;
        }

        let Some(metadata) = registry.metadata(&service.provider_type) else {
            result.add_error(
                format!("{prefix}.type"),
                format!(
                    "Unknown service type '{}'. Valid types: {:?}",
                    service.provider_type,
                    registry.provider_types()
                ),
                ConfigErrorCode::UnknownType,
            );
            return;
        };

        let values = settings_by_key(&service.settings);
        for field in &metadata.config_schema.fields {
            let value = values.get(&field.key).filter(|v| is_set(v));

            match (value, &field.validation_regex) {
                (None, _) if field.required => result.add_error(
                    format!("{prefix}.{}", field.key),
                    format!("{} requires '{}'", metadata.name, field.key),
                    ConfigErrorCode::MissingRequired,
                ),
                (Some(value), Some(pattern)) => {
                    let strings = match value {
                        serde_json::Value::String(s) => vec![s.as_str()],
                        serde_json::Value::Array(items) => {
                            items.iter().filter_map(|v| v.as_str()).collect()
                        }
                        _ => Vec::new(),
                    };

                    let mismatch = strings
                        .iter()
                        .find(|s| !matches_pattern(pattern, s.trim()));
                    if let Some(bad) = mismatch {
                        let message = field
                            .validation_message
                            .clone()
                            .unwrap_or_else(|| format!("Must match {pattern}"));
                        result.add_error(
                            format!("{prefix}.{}", field.key),
                            format!("{message}: '{bad}'"),
                            ConfigErrorCode::InvalidValue,
                        );
                    }
                }
                _ => {}
            }
        }

        if service.settings.projects.is_empty() {
            result.add_warning(
                format!("{prefix}.projects"),
                "No projects selected, status will be empty".to_string(),
            );
        }
    }
}

/// Settings as a map keyed like the config file (`updateInterval`, `baseUrl`, ...)
fn settings_by_key(settings: &Settings) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::to_value(settings) {
        Ok(serde_json::Value::Object(fields)) => fields,
        _ => serde_json::Map::new(),
    }
}

fn is_set(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::String(s) => !s.trim().is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Null => false,
        _ => true,
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(e) => {
            tracing::warn!("Ignoring invalid validation pattern {pattern}: {e}");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins;

    fn parse(content: &str) -> BuildwatchConfig {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let config = parse(
            r#"
            [services.ci]
            type = "buildkite"
            token = "t"
            projects = ["org/web"]

            [services.legacy]
            type = "cruisecontrol"
            url = "http://cc.example.com/"
            projects = ["connectfour"]
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        assert!(result.is_ok(), "{}", result.summary());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unknown_type() {
        let config = parse(
            r#"
            [services.old]
            type = "hudson"
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        assert!(!result.is_ok());
        assert_eq!(result.errors[0].field, "services.old.type");
        assert_eq!(result.errors[0].code, ConfigErrorCode::UnknownType);
    }

    #[test]
    fn test_missing_type() {
        let config = parse(
            r#"
            [services.ci]
            token = "t"
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ConfigErrorCode::MissingRequired);
    }

    #[test]
    fn test_zero_update_interval() {
        let config = parse(
            r#"
            [services.ci]
            type = "buildkite"
            token = "t"
            updateInterval = 0
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "services.ci.updateInterval");
        assert_eq!(result.errors[0].code, ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_required_plugin_fields() {
        let config = parse(
            r#"
            [services.ci]
            type = "buildkite"

            [services.legacy]
            type = "cctray"
            url = "  "
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["services.ci.token", "services.legacy.url"]);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_field_pattern() {
        let config = parse(
            r#"
            [services.legacy]
            type = "cruisecontrol"
            url = "cc.example.com"
            projects = ["connectfour"]
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "services.legacy.url");
        assert_eq!(
            result.errors[0].message,
            "URL must start with http:// or https://: 'cc.example.com'"
        );
        assert_eq!(result.errors[0].code, ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_field_pattern_checks_each_project() {
        let config = parse(
            r#"
            [services.ci]
            type = "buildkite"
            token = "t"
            projects = ["org/web", "api"]
            "#,
        );

        let result = ConfigValidator::validate(&config, &plugins::init_registry());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "services.ci.projects");
        assert!(result.errors[0].message.ends_with(": 'api'"));
    }

    #[test]
    fn test_empty_config_warns() {
        let registry = plugins::init_registry();
        let result = ConfigValidator::validate(&BuildwatchConfig::default(), &registry);

        assert!(result.is_ok());
        assert_eq!(result.warnings[0].field, "services");
    }
}
