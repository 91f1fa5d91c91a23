use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading icon records or configuration.
///
/// The rasterizer itself never fails; these cover the I/O and decoding
/// surfaces around it.
#[derive(Error, Debug, Clone)]
pub enum PreviewError {
    /// Error when reading an input file or stdin
    #[error("Failed to read {path}: {message}")]
    InputReadError { path: PathBuf, message: Arc<String> },

    /// Error when JSON parsing fails
    #[error("Invalid JSON: {0}")]
    JsonParseError(Arc<String>),

    /// Input is neither JSON nor an SVG document
    #[error("Invalid input: {0}")]
    InvalidInput(Arc<String>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(Arc<String>),

    /// Parameter validation error
    #[error("Invalid parameter: {field} - {message}")]
    ParameterValidationError { field: Arc<String>, message: Arc<String> },

    /// IO error
    #[error("IO error: {0}")]
    IoError(Arc<String>),
}

/// Type alias for Result with `PreviewError`
pub type Result<T> = std::result::Result<T, PreviewError>;

impl From<std::io::Error> for PreviewError {
    fn from(error: std::io::Error) -> Self {
        PreviewError::IoError(Arc::new(error.to_string()))
    }
}

impl From<serde_json::Error> for PreviewError {
    fn from(error: serde_json::Error) -> Self {
        PreviewError::JsonParseError(Arc::new(error.to_string()))
    }
}

impl PreviewError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        PreviewError::ConfigurationError(Arc::new(message.into()))
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PreviewError::InvalidInput(Arc::new(message.into()))
    }

    /// Create a parameter validation error
    pub fn param_error(field: &str, message: &str) -> Self {
        PreviewError::ParameterValidationError {
            field: Arc::new(field.to_string()),
            message: Arc::new(message.to_string()),
        }
    }

    /// Create an input read error for a path
    pub fn read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PreviewError::InputReadError {
            path: path.into(),
            message: Arc::new(message.into()),
        }
    }
}
