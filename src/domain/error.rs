//! # Errors
//!
//! The two failure categories an assist call can produce.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistError {
    /// The request is unusable as given (missing or empty prompt).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Anything unexpected while composing the response.
    #[error("internal failure: {0}")]
    Internal(String),
}

impl AssistError {
    pub fn missing_prompt() -> Self {
        Self::InvalidRequest("missing prompt".to_string())
    }
}
