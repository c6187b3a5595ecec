//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod customers;
pub mod extract;
pub mod pets;

pub use customers::{create_customer, get_customer, list_customer_pets, list_customers};
pub use pets::{create_pet, delete_pet, get_pet, list_pets, update_pet};
