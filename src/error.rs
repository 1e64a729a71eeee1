use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Invalid version range: start '{start}' must be lower than end '{end}'")]
    InvalidRange { start: String, end: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in merge-release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create an invalid range error from the literal endpoints
    pub fn invalid_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        ReleaseNotesError::InvalidRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a repository identity error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Repository(msg.into())
    }

    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ReleaseNotesError::Api {
            status,
            message: message.into(),
        }
    }
}
