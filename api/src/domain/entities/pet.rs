//! Pet domain entity
//!
//! An animal owned by exactly one customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;
use super::{normalize_optional, require_text, MAX_NAME_LEN};
use crate::error::DomainError;

pub const MAX_SPECIES_LEN: usize = 64;
pub const MAX_BREED_LEN: usize = 64;

/// Unique identifier for a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PetId(pub i32);

impl From<i32> for PetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet registered at the shop
#[derive(Debug, Clone, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub customer_id: CustomerId,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new pet
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub customer_id: CustomerId,
}

impl NewPet {
    /// Trim every field, drop blank optionals and check the column limits.
    /// Owner existence is a storage concern and is checked by the service.
    pub fn normalized(self) -> Result<Self, DomainError> {
        let name = require_text("name", &self.name, MAX_NAME_LEN)?;
        let species = normalize_optional("species", self.species, MAX_SPECIES_LEN)?;
        let breed = normalize_optional("breed", self.breed, MAX_BREED_LEN)?;

        if let Some(age) = self.age {
            if age < 0 {
                return Err(DomainError::Validation(format!(
                    "age must not be negative, got {}",
                    age
                )));
            }
        }

        Ok(Self {
            name,
            species,
            breed,
            age: self.age,
            customer_id: self.customer_id,
        })
    }
}
