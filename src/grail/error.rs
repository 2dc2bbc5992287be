//! Seed-data-specific error types.

/// Errors that can occur while fetching the published item lists.
#[derive(Debug, thiserror::Error)]
pub enum GrailError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// A seed resource responded with a non-success status
    #[error("Seed resource '{resource}' returned status {status}")]
    ResourceStatus { resource: String, status: u16 },

    /// A seed resource did not parse as a name list
    #[error("Failed to parse seed resource '{resource}': {message}")]
    Unparseable { resource: String, message: String },

    /// Generic seed data error
    #[error("Seed data error: {0}")]
    #[allow(dead_code)]
    Other(String),
}
