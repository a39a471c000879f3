//! Failure taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and unsuccessful answers are handled identically by the
//! components (log, leave the DOM alone); the variants exist so the log line
//! says which of the two happened.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} answered with status {status}")]
    Status { path: String, status: u16 },
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("{path} did not report success")]
    Rejected { path: String },
}

impl ApiError {
    /// Stable short code used in console logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "E_TRANSPORT",
            Self::Status { .. } => "E_STATUS",
            Self::Decode { .. } => "E_DECODE",
            Self::Rejected { .. } => "E_REJECTED",
        }
    }
}
