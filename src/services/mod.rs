use thiserror::Error;

use crate::forms::FieldError;
use crate::repository::errors::RepositoryError;

pub mod client;

/// Failures surfaced by the service layer to the HTTP routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("payload has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("client not found")]
    NotFound,

    #[error(transparent)]
    Repository(RepositoryError),

    #[error("image storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<Vec<FieldError>> for ServiceError {
    fn from(errors: Vec<FieldError>) -> Self {
        ServiceError::Validation(errors)
    }
}
