//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod customer_repo;
pub mod pet_repo;
pub mod schema;


pub use customer_repo::PostgresCustomerRepository;
pub use pet_repo::PostgresPetRepository;
pub use schema::ensure_schema;
