//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId, NewCustomer, NewPet, Pet, PetId};
use crate::domain::pagination::Page;
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by ID
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// List customers ordered by ID
    async fn find_all(&self, page: Page) -> Result<Vec<Customer>, DomainError>;

    /// Create a new customer.
    /// Fails with `AlreadyExists` when the email is taken.
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;
}

/// Repository for Pet entities
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Find a pet by ID
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError>;

    /// List pets ordered by ID
    async fn find_all(&self, page: Page) -> Result<Vec<Pet>, DomainError>;

    /// List the pets owned by a customer, ordered by ID
    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
        page: Page,
    ) -> Result<Vec<Pet>, DomainError>;

    /// Create a new pet.
    /// Fails with `Validation` when the owning customer does not exist.
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError>;
}
