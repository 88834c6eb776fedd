//! Client error type
//!
//! Every client operation fails with the single [`RemoteApiError`] kind;
//! the UI layer only ever needs its human-readable message.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a remote ResPax operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteApiError {
    message: String,
}

impl RemoteApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Structured error body some endpoints return with an error status
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error_message: Option<String>,
}
