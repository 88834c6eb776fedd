//! Tour query validation
//!
//! Lookup requests embed their ids straight into endpoint paths, so the
//! ids must be positive integers and the scoping fields non-empty before
//! a request is built.

use thiserror::Error;

use crate::types::TourQuery;

/// Errors that can occur while validating a tour query
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty host id")]
    EmptyHostId,

    #[error("Empty tour code")]
    EmptyTourCode,

    #[error("Invalid {field}: must be a positive integer, got {value}")]
    NonPositiveId { field: String, value: i64 },

    #[error("Invalid {field}: '{value}' is not an integer")]
    UnparseableId { field: String, value: String },
}

/// Validate a tour query before it is turned into a request.
///
/// # Errors
///
/// Returns `ValidationError` if a scoping field is empty or an id is not
/// a positive integer.
pub fn validate_query(query: &TourQuery) -> Result<(), ValidationError> {
    if query.host_id.is_empty() {
        return Err(ValidationError::EmptyHostId);
    }
    if query.tour_code.is_empty() {
        return Err(ValidationError::EmptyTourCode);
    }

    require_positive("basis_id", query.basis_id)?;
    require_positive("subbasis_id", query.subbasis_id)?;
    require_positive("tour_time_id", query.tour_time_id)?;

    Ok(())
}

fn require_positive(field: &str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositiveId {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
