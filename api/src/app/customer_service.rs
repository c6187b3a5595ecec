//! Customer service
//!
//! Handles customer registration and lookup.

use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::pagination::Page;
use crate::domain::ports::CustomerRepository;
use crate::error::{AppError, DomainError};

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository + ?Sized,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository + ?Sized,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// List customers ordered by ID
    pub async fn list(&self, page: Page) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.find_all(page).await?)
    }

    /// Find a customer by ID
    pub async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.find_by_id(id).await?)
    }

    /// Register a new customer
    ///
    /// The email must not belong to another customer. The repository's unique
    /// index reports a concurrent duplicate with the same error.
    pub async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let new_customer = new_customer.normalized()?;

        if self
            .customers
            .find_by_email(&new_customer.email)
            .await?
            .is_some()
        {
            tracing::warn!(email = %new_customer.email, "Rejected duplicate customer email");
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Email '{}' already registered",
                new_customer.email
            ))));
        }

        let customer = self.customers.create(&new_customer).await?;
        tracing::info!(customer_id = %customer.id, "Customer created");

        Ok(customer)
    }
}
