//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{Customer, CustomerId, NewCustomer, NewPet, Pet, PetId};

/// Create a test customer with default values
pub fn test_customer() -> Customer {
    test_customer_with_id(1)
}

/// Create a test customer with a specific ID; the email is derived from it
pub fn test_customer_with_id(id: i32) -> Customer {
    Customer {
        id: CustomerId(id),
        name: format!("Customer {}", id),
        email: format!("customer{}@example.com", id),
        phone: Some("555-0100".to_string()),
        created_at: Utc::now(),
    }
}

/// Create a test pet owned by the given customer
pub fn test_pet(id: i32, owner: CustomerId) -> Pet {
    Pet {
        id: PetId(id),
        name: format!("Pet {}", id),
        species: Some("dog".to_string()),
        breed: None,
        age: Some(3),
        customer_id: owner,
        created_at: Utc::now(),
    }
}

/// Valid customer creation data
pub fn new_customer(email: &str) -> NewCustomer {
    NewCustomer {
        name: "Ana Souza".to_string(),
        email: email.to_string(),
        phone: Some("555-0101".to_string()),
    }
}

/// Valid pet creation data for the given owner
pub fn new_pet(owner: CustomerId) -> NewPet {
    NewPet {
        name: "Rex".to_string(),
        species: Some("dog".to_string()),
        breed: Some("beagle".to_string()),
        age: Some(2),
        customer_id: owner,
    }
}
