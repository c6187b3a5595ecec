//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Customer, CustomerId, NewCustomer, NewPet, Pet, PetId};
use crate::domain::pagination::Page;
use crate::domain::ports::{CustomerRepository, PetRepository};
use crate::error::DomainError;

fn paginate<T>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    items
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .collect()
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
    next_id: Arc<RwLock<i32>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        {
            let mut customers = self.customers.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(customer.id.0);
            customers.insert(customer.id, customer);
        }
        self
    }

    pub fn count(&self) -> usize {
        self.customers.read().unwrap().len()
    }

    pub fn contains(&self, id: &CustomerId) -> bool {
        self.customers.read().unwrap().contains_key(id)
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

// BTreeMap keeps ID order, matching the ORDER BY id of the PostgreSQL adapter
#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        self.check_failure()?;
        let customers = self.customers.read().unwrap();
        Ok(customers.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        self.check_failure()?;
        let customers = self.customers.read().unwrap();
        Ok(customers.values().find(|c| c.email == email).cloned())
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Customer>, DomainError> {
        self.check_failure()?;
        let customers = self.customers.read().unwrap();
        Ok(paginate(customers.values().cloned(), page))
    }

    async fn create(&self, new_customer: &NewCustomer) -> Result<Customer, DomainError> {
        self.check_failure()?;
        let mut customers = self.customers.write().unwrap();

        if customers.values().any(|c| c.email == new_customer.email) {
            return Err(DomainError::AlreadyExists(format!(
                "Email '{}' already registered",
                new_customer.email
            )));
        }

        let mut next_id = self.next_id.write().unwrap();
        *next_id += 1;

        let customer = Customer {
            id: CustomerId(*next_id),
            name: new_customer.name.clone(),
            email: new_customer.email.clone(),
            phone: new_customer.phone.clone(),
            created_at: Utc::now(),
        };
        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }
}

// ============================================================================
// In-Memory Pet Repository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<BTreeMap<PetId, Pet>>>,
    next_id: Arc<RwLock<i32>>,
    /// When set, inserts enforce the owner foreign key against this repository
    owners: Option<InMemoryCustomerRepository>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Enforce the foreign key against the given customers
    pub fn with_owners(self, owners: InMemoryCustomerRepository) -> Self {
        Self {
            owners: Some(owners),
            ..self
        }
    }

    /// Pre-populate with a pet for testing
    pub fn with_pet(self, pet: Pet) -> Self {
        {
            let mut pets = self.pets.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(pet.id.0);
            pets.insert(pet.id, pet);
        }
        self
    }

    pub fn count(&self) -> usize {
        self.pets.read().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        self.check_failure()?;
        let pets = self.pets.read().unwrap();
        Ok(pets.get(id).cloned())
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Pet>, DomainError> {
        self.check_failure()?;
        let pets = self.pets.read().unwrap();
        Ok(paginate(pets.values().cloned(), page))
    }

    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
        page: Page,
    ) -> Result<Vec<Pet>, DomainError> {
        self.check_failure()?;
        let pets = self.pets.read().unwrap();
        Ok(paginate(
            pets.values()
                .filter(|p| p.customer_id == *customer_id)
                .cloned(),
            page,
        ))
    }

    async fn create(&self, new_pet: &NewPet) -> Result<Pet, DomainError> {
        self.check_failure()?;

        if let Some(owners) = &self.owners {
            if !owners.contains(&new_pet.customer_id) {
                return Err(DomainError::Validation(format!(
                    "Customer (owner) {} not found",
                    new_pet.customer_id
                )));
            }
        }

        let mut pets = self.pets.write().unwrap();
        let mut next_id = self.next_id.write().unwrap();
        *next_id += 1;

        let pet = Pet {
            id: PetId(*next_id),
            name: new_pet.name.clone(),
            species: new_pet.species.clone(),
            breed: new_pet.breed.clone(),
            age: new_pet.age,
            customer_id: new_pet.customer_id,
            created_at: Utc::now(),
        };
        pets.insert(pet.id, pet.clone());

        Ok(pet)
    }
}
