// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Misconfigured slug options. Raised before a record is touched and never
/// retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOption {
    #[error("could not find a field to generate the slug from")]
    MissingSourceFields,
    #[error("could not find a field to save the slug to")]
    MissingSlugField,
    #[error("maximum length should be greater than zero")]
    InvalidMaximumLength,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid slug option: {0}")]
    InvalidOption(#[from] InvalidOption),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
