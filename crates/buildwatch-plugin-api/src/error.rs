use thiserror::Error;

/// Plugin error types
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Pipeline not found: {0}")]
    PipelineNotFound(String),

    #[error("Provider not supported: {0}")]
    ProviderNotSupported(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PluginError {
    /// Classifies a non-success HTTP status returned while fetching `what`.
    pub fn from_http_status(status: u16, what: &str) -> Self {
        match status {
            401 | 403 => {
                PluginError::AuthenticationFailed(format!("{what} returned HTTP {status}"))
            }
            404 => PluginError::PipelineNotFound(format!("{what} returned HTTP 404")),
            _ => PluginError::ApiError(format!("{what} returned HTTP {status}")),
        }
    }
}

pub type PluginResult<T> = Result<T, PluginError>;
