//! Error types for repo-graph operations
//!
//! Fetch failures are fatal for an extraction run. Missing README sections and
//! unanswerable questions are not errors at all and never surface here.

use thiserror::Error;

/// Main error type for repo-graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Hosting API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Repository argument is not of the form `owner/repo`
    #[error("Invalid repository '{input}': expected owner/repo")]
    InvalidRepo { input: String },

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl GraphError {
    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    /// Create an invalid repository error
    pub fn invalid_repo(input: impl Into<String>) -> Self {
        Self::InvalidRepo { input: input.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}

/// Result type for repo-graph operations
pub type GraphResult<T> = Result<T, GraphError>;

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::api(404, "Not Found");
        assert_eq!(err.to_string(), "API error (status 404): Not Found");

        let err = GraphError::invalid_repo("frequenz");
        assert_eq!(err.to_string(), "Invalid repository 'frequenz': expected owner/repo");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GraphError = json_err.into();
        assert!(matches!(err, GraphError::Json(_)));

        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: GraphError = toml_err.into();
        assert!(matches!(err, GraphError::Config { .. }));
    }
}
