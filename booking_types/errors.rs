use std::time::Duration;
use thiserror::Error;

pub mod app_error;
pub mod db_error;
pub mod domain_error;

pub use app_error::AppError;
pub use db_error::DbError;
pub use domain_error::DomainError;

pub use crate::validation::ValidationErrors;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Coarse outcome of a failed pipeline invocation.
///
/// Transport adapters translate a kind into a status code; they never need
/// to look at the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    AlreadyExists,
    NotFound,
    Unauthorized,
    Cancelled,
    Unexpected,
}

impl ApplicationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApplicationError::Validation(_) => FailureKind::Validation,
            ApplicationError::Domain(e) => match e {
                DomainError::AirportAlreadyExists { .. }
                | DomainError::PassengerAlreadyExists { .. }
                | DomainError::UserAlreadyExists { .. } => FailureKind::AlreadyExists,
                DomainError::AlreadyDeleted(_) => FailureKind::NotFound,
            },
            ApplicationError::Db(e) => match e {
                DbError::UniqueViolation(_) => FailureKind::AlreadyExists,
                DbError::AirportNotFound(_)
                | DbError::PassengerNotFound(_)
                | DbError::UserByIdNotFound(_) => FailureKind::NotFound,
                _ => FailureKind::Unexpected,
            },
            ApplicationError::App(AppError::WrongAuthCredentials) => FailureKind::Unauthorized,
            ApplicationError::Cancelled | ApplicationError::Timeout(_) => FailureKind::Cancelled,
            _ => FailureKind::Unexpected,
        }
    }

    /// Field-level violations, when this is a validation failure.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ApplicationError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::validation::Violation;

    #[test]
    fn test_precondition_failures_are_classified() {
        let exists: ApplicationError = DomainError::AirportAlreadyExists {
            code: "JFK".to_string(),
        }
        .into();
        assert_eq!(exists.kind(), FailureKind::AlreadyExists);

        let raced: ApplicationError =
            DbError::UniqueViolation("airports_code_live_idx".to_string()).into();
        assert_eq!(raced.kind(), FailureKind::AlreadyExists);

        let missing: ApplicationError = DbError::PassengerNotFound(Uuid::new_v4()).into();
        assert_eq!(missing.kind(), FailureKind::NotFound);
    }

    #[test]
    fn test_unexpected_failures_are_classified() {
        let err = ApplicationError::Infrastructure("connection refused".to_string());
        assert_eq!(err.kind(), FailureKind::Unexpected);

        let err: ApplicationError = DbError::Transaction("still borrowed".to_string()).into();
        assert_eq!(err.kind(), FailureKind::Unexpected);
    }

    #[test]
    fn test_validation_failures_expose_violations() {
        let errors = ValidationErrors::from(vec![Violation::new("code", "Code is required")]);
        let err: ApplicationError = errors.into();

        assert_eq!(err.kind(), FailureKind::Validation);
        let violations = err.violations().unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.iter().next().unwrap().field, "code");
    }

    #[test]
    fn test_deadline_failures_are_cancellations() {
        assert_eq!(ApplicationError::Cancelled.kind(), FailureKind::Cancelled);
        assert_eq!(
            ApplicationError::Timeout(Duration::from_millis(5)).kind(),
            FailureKind::Cancelled
        );
    }
}
