use std::sync::PoisonError;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(err.to_string())
    }
}

// A poisoned lock means a writer panicked while holding the store.
impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(err: PoisonError<T>) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
