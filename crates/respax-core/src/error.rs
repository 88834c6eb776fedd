//! Error types for respax-core

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur in core booking operations
#[derive(Debug, Error)]
pub enum RespaxError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
