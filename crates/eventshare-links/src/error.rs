//! Error types for link building
//!
//! Parsing never fails (unrecognized input yields `None`). Errors only arise
//! when the caller asks to build a link from a value that is not well formed.

use thiserror::Error;

/// Link building errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Join code is not exactly 6 ASCII letters or digits
    #[error("Invalid event code: '{0}'")]
    InvalidEventCode(String),

    /// Event ID is empty or contains characters other than hex digits and hyphens
    #[error("Invalid event id: '{0}'")]
    InvalidEventId(String),
}

/// Result type for link operations.
pub type LinkResult<T> = Result<T, LinkError>;

impl LinkError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            LinkError::InvalidEventCode(_) => "INVALID_EVENT_CODE",
            LinkError::InvalidEventId(_) => "INVALID_EVENT_ID",
        }
    }
}
