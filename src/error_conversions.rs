//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls for its constraint errors live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for crate::services::ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        use crate::services::ServiceError;

        match val {
            // Ids come straight from the request path.
            TypeConstraintError::NonPositiveId => ServiceError::InvalidInput(val.to_string()),
            other => ServiceError::TypeConstraint(other.to_string()),
        }
    }
}
