//! Domain-specific error types and error handling.
//!
//! Client-correctable rejections are not errors: entry points report them
//! as `RegistrationOutcome` values. `DomainError` covers the failures of the
//! collaborators the core depends on (stores, settings, code issuance).

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Optimistic concurrency check failed or a unique key already exists
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
