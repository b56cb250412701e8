//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique key and be thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique key
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique key
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Reasons a record is refused by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    MissingCartId,
    MissingRenterName,
    MissingMonthlyRent,
    DuplicateCartId(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingCartId => write!(f, "cart id is required"),
            ValidationError::MissingRenterName => write!(f, "renter name is required"),
            ValidationError::MissingMonthlyRent => write!(f, "monthly rent is required"),
            ValidationError::DuplicateCartId(id) => write!(f, "cart {} already exists", id),
        }
    }
}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Validation(ValidationError),
    Storage(String),
    Scheduling(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Validation(err) => write!(f, "Validation failed: {}", err),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Scheduling(msg) => write!(f, "Scheduling error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::Validation(err)
    }
}
