//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod customer;
pub mod pet;

pub use customer::{Customer, CustomerId, NewCustomer};
pub use pet::{NewPet, Pet, PetId};

use crate::error::DomainError;

/// Column limit shared by customer and pet names
pub const MAX_NAME_LEN: usize = 128;

/// Trim a required field and check it is non-empty and within `max` characters.
fn require_text(field: &str, value: &str, max: usize) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{} must not be empty", field)));
    }
    check_len(field, value, max)?;
    Ok(value.to_string())
}

/// Trim an optional field, treating blank input as absent.
fn normalize_optional(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, DomainError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => {
            check_len(field, v, max)?;
            Ok(Some(v.to_string()))
        }
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
