//! Submission error types

use std::time::Duration;

use super::FieldValidationError;
use super::validation::join_field_errors;

/// Error returned by a [`Submitter`](crate::submit::Submitter).
///
/// Covers what an add/edit/delete form can run into when it sends data to
/// a backend: rejected input, missing or conflicting records and transport
/// failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// One or more fields failed validation.
    #[error("validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldValidationError>),

    /// The backend refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The record the request refers to does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The request conflicts with existing data.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend did not answer in time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl SubmitError {
    /// Returns `true` if retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, SubmitError::Network(_) | SubmitError::Timeout(_))
    }

    /// Returns the validation errors, if this is a validation failure.
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            SubmitError::Validation(errors) => errors,
            _ => &[],
        }
    }
}
