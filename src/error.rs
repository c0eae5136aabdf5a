//! Error types for tree materialization and the repository content boundary.

use thiserror::Error;

/// Errors raised while materializing a file tree from flat records.
///
/// Tree building is all-or-nothing: when any of these is returned no partial
/// tree is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A path implies both a directory and a file with the same name under the
    /// same parent, or the same file path appears twice.
    #[error("path conflict at '{path}': {reason}")]
    Conflict { path: String, reason: String },

    /// A path with no non-empty segments (e.g. `""` or `"///"`), or one that
    /// contains a `.` or `..` segment.
    #[error("malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    /// A path nests deeper than the configured cap.
    #[error("path '{path}' exceeds maximum depth of {max_depth} segments")]
    DepthExceeded { path: String, max_depth: usize },
}

/// Errors crossing the repository content service boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or non-success status from the content service.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The service rejected the bearer credential.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Rejected before reaching the service.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Fetch(err.to_string())
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
