//! Domain Layer
//!
//! Contains the rental entities and core abstractions.
//! This layer has no storage or platform dependencies.

mod entity;
mod file_ref;
mod form;
mod rental;

pub use entity::{DomainError, DomainResult, Entity, ValidationError};
pub use file_ref::FileRef;
pub use form::{FormField, RentalForm};
pub use rental::{parse_amount, parse_date, RentStatus, RentalRecord};
