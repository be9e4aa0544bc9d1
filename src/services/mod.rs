//! Use cases behind the HTTP layer.
//!
//! Services are plain functions generic over the repository traits they need,
//! so they run unchanged against [`crate::repository::DieselRepository`] and
//! the mocks in [`crate::repository::mock`].

use thiserror::Error;
use validator::ValidationErrors;

use crate::listing::ListError;
use crate::repository::errors::RepositoryError;

pub mod courses;
pub mod interests;
pub mod jobs;
pub mod master_fields;
pub mod sub_fields;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            RepositoryError::ConstraintViolation(message) => ServiceError::InvalidInput(message),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<ListError> for ServiceError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::NotFound(_) => ServiceError::NotFound(err.to_string()),
            ListError::InvalidInput(message) => ServiceError::InvalidInput(message),
            ListError::Repository(inner) => inner.into(),
        }
    }
}

/// Level a failed listing is logged at.
///
/// Only storage failures are errors; guard misses and rejected filters are
/// ordinary client outcomes.
pub(crate) fn list_failure_level(err: &ListError) -> log::Level {
    match err {
        ListError::Repository(_) => log::Level::Error,
        ListError::NotFound(_) | ListError::InvalidInput(_) => log::Level::Debug,
    }
}

pub(crate) fn log_list_failure(what: &str, err: &ListError) {
    log::log!(list_failure_level(err), "Failed to list {what}: {err}");
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_not_found_keeps_resource_name() {
        let err = ServiceError::from(ListError::NotFound("Course"));
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Course not found"));
    }

    #[test]
    fn only_storage_failures_log_as_errors() {
        assert_eq!(
            list_failure_level(&ListError::NotFound("Course")),
            log::Level::Debug
        );
        assert_eq!(
            list_failure_level(&ListError::InvalidInput("unknown time filter".into())),
            log::Level::Debug
        );
        assert_eq!(
            list_failure_level(&ListError::Repository(RepositoryError::ConnectionError(
                "pool timed out".into()
            ))),
            log::Level::Error
        );
    }

    #[test]
    fn storage_errors_stay_repository_errors() {
        let err = ServiceError::from(ListError::Repository(RepositoryError::DatabaseError(
            "disk I/O error".into(),
        )));
        assert!(matches!(err, ServiceError::Repository(_)));
    }

    #[test]
    fn constraint_violations_are_invalid_input() {
        let err = ServiceError::from(RepositoryError::ConstraintViolation(
            "Foreign key constraint violation: FOREIGN KEY constraint failed".into(),
        ));
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
