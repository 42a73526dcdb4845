use thiserror::Error;

/// Error type for sitecheck operations
#[derive(Debug, Error)]
pub enum SiteCheckError {
    #[error("Malformed template: {fragments} fragment(s) cannot interleave {values} value(s)")]
    MalformedTemplate { fragments: usize, values: usize },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Result type alias for sitecheck operations
pub type Result<T> = std::result::Result<T, SiteCheckError>;
