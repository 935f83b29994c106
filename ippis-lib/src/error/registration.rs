//! Registration service error types

use uuid::Uuid;

use super::FieldValidationError;
use super::SubmitError;
use super::validation::join_field_errors;
use crate::registration::RegistrationStatus;

/// Error returned by the [`RegistrationService`](crate::registration::RegistrationService).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    #[error("invalid registration: {}", join_field_errors(.0))]
    Invalid(Vec<FieldValidationError>),
    #[error("email {0} is already registered")]
    DuplicateEmail(String),
    #[error("IPPIS number {0} is already registered")]
    DuplicateIppisNumber(String),
    #[error("registration {0} not found")]
    NotFound(Uuid),
    #[error("registration {id} is {status}, only pending registrations can be reviewed")]
    NotPending { id: Uuid, status: RegistrationStatus },
}

impl From<RegistrationError> for SubmitError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Invalid(errors) => SubmitError::Validation(errors),
            RegistrationError::DuplicateEmail(_) | RegistrationError::DuplicateIppisNumber(_) => {
                SubmitError::Conflict(err.to_string())
            }
            RegistrationError::NotFound(id) => SubmitError::NotFound {
                entity: "registration",
                id: id.to_string(),
            },
            RegistrationError::NotPending { .. } => SubmitError::Rejected(err.to_string()),
        }
    }
}
