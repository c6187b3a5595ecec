//! PostgreSQL adapter for CustomerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::pagination::Page;
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find()
            .filter(customers::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Customer>, DomainError> {
        let results = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = customers::ActiveModel {
            id: NotSet,
            name: Set(customer.name.clone()),
            email: Set(customer.email.clone()),
            phone: Set(customer.phone.clone()),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &customer.email))?;

        Ok(result.into())
    }
}

/// The unique index on `email` backs the service-level duplicate check.
fn map_insert_error(err: DbErr, email: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(format!("Email '{}' already registered", email))
        }
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_converts_to_domain() {
        let created_at = Utc::now().fixed_offset();
        let model = customers::Model {
            id: 3,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            created_at,
        };

        let customer: Customer = model.into();
        assert_eq!(customer.id, CustomerId(3));
        assert_eq!(customer.email, "ana@example.com");
        assert!(customer.phone.is_none());
        assert_eq!(customer.created_at, created_at.with_timezone(&Utc));
    }

    #[test]
    fn non_constraint_errors_stay_database_errors() {
        let err = map_insert_error(DbErr::Custom("connection reset".into()), "ana@example.com");
        assert!(matches!(err, DomainError::Database(msg) if msg.contains("connection reset")));
    }
}
