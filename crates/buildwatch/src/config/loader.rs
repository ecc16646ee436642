use std::path::{
    Path,
    PathBuf,
};

use buildwatch_plugin_api::PluginRegistry;
use thiserror::Error;

use super::interpolation::{
    interpolate_toml,
    InterpolationError,
};
use super::schema::BuildwatchConfig;
use super::validation::ConfigValidator;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] InterpolationError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub struct ConfigLoader;

impl ConfigLoader {
    /// An explicit path (flag or `BUILDWATCH_CONFIG`) wins over the user config dir
    pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            tracing::debug!("Using config path from command line: {}", path.display());
            return path.to_path_buf();
        }

        let path = BuildwatchConfig::default_config_path();
        tracing::debug!("Using default config path: {}", path.display());
        path
    }

    pub fn load(path: &Path) -> ConfigLoadResult<BuildwatchConfig> {
        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads the file and rejects it unless every service passes validation
    pub fn load_validated(
        path: &Path, registry: &PluginRegistry,
    ) -> ConfigLoadResult<BuildwatchConfig> {
        let config = Self::load(path)?;

        let validation = ConfigValidator::validate(&config, registry);
        for warning in &validation.warnings {
            tracing::warn!("{warning}");
        }
        if !validation.is_ok() {
            return Err(ConfigLoadError::InvalidConfig(validation.summary()));
        }

        Ok(config)
    }

    pub fn parse(content: &str) -> ConfigLoadResult<BuildwatchConfig> {
        let mut value: toml::Value = toml::from_str(content)?;

        interpolate_toml(&mut value)?;

        let mut config: BuildwatchConfig = value.try_into().map_err(|e| {
            ConfigLoadError::InvalidConfig(format!("Failed to deserialize config: {e}"))
        })?;
        config.apply_defaults();

        tracing::debug!(services = config.services.len(), "Loaded config");

        Ok(config)
    }
}
