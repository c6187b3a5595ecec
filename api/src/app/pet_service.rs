//! Pet service
//!
//! Handles pet registration and lookup. Every pet belongs to an existing customer.

use std::sync::Arc;

use crate::domain::entities::{CustomerId, NewPet, Pet, PetId};
use crate::domain::pagination::Page;
use crate::domain::ports::{CustomerRepository, PetRepository};
use crate::error::{AppError, DomainError};

/// Service for managing pets
pub struct PetService<PR, CR>
where
    PR: PetRepository + ?Sized,
    CR: CustomerRepository + ?Sized,
{
    pets: Arc<PR>,
    customers: Arc<CR>,
}

impl<PR, CR> PetService<PR, CR>
where
    PR: PetRepository + ?Sized,
    CR: CustomerRepository + ?Sized,
{
    pub fn new(pets: Arc<PR>, customers: Arc<CR>) -> Self {
        Self { pets, customers }
    }

    /// List pets ordered by ID
    pub async fn list(&self, page: Page) -> Result<Vec<Pet>, AppError> {
        Ok(self.pets.find_all(page).await?)
    }

    /// Find a pet by ID
    pub async fn get(&self, id: &PetId) -> Result<Option<Pet>, AppError> {
        Ok(self.pets.find_by_id(id).await?)
    }

    /// List the pets of one customer
    pub async fn list_for_customer(
        &self,
        customer_id: &CustomerId,
        page: Page,
    ) -> Result<Vec<Pet>, AppError> {
        if self.customers.find_by_id(customer_id).await?.is_none() {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "Customer {} not found",
                customer_id
            ))));
        }

        Ok(self.pets.find_by_customer(customer_id, page).await?)
    }

    /// Register a new pet for an existing customer
    pub async fn create(&self, new_pet: NewPet) -> Result<Pet, AppError> {
        let new_pet = new_pet.normalized()?;

        if self
            .customers
            .find_by_id(&new_pet.customer_id)
            .await?
            .is_none()
        {
            tracing::warn!(customer_id = %new_pet.customer_id, "Rejected pet for unknown owner");
            return Err(AppError::Domain(DomainError::Validation(format!(
                "Customer (owner) {} not found",
                new_pet.customer_id
            ))));
        }

        let pet = self.pets.create(&new_pet).await?;
        tracing::info!(pet_id = %pet.id, customer_id = %pet.customer_id, "Pet created");

        Ok(pet)
    }
}
