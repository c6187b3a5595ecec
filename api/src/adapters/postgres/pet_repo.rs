//! PostgreSQL adapter for PetRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::domain::entities::{CustomerId, NewPet, Pet, PetId};
use crate::domain::pagination::Page;
use crate::domain::ports::PetRepository;
use crate::entity::pets;
use crate::error::DomainError;

/// PostgreSQL implementation of PetRepository
pub struct PostgresPetRepository {
    db: DatabaseConnection,
}

impl PostgresPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PostgresPetRepository {
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        let result = pets::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Pet>, DomainError> {
        let results = pets::Entity::find()
            .order_by_asc(pets::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
        page: Page,
    ) -> Result<Vec<Pet>, DomainError> {
        let results = pets::Entity::find()
            .filter(pets::Column::CustomerId.eq(customer_id.0))
            .order_by_asc(pets::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = pets::ActiveModel {
            id: NotSet,
            name: Set(pet.name.clone()),
            species: Set(pet.species.clone()),
            breed: Set(pet.breed.clone()),
            age: Set(pet.age),
            customer_id: Set(pet.customer_id.0),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &pet.customer_id))?;

        Ok(result.into())
    }
}

/// An owner deleted between the service check and the insert trips the foreign key.
fn map_insert_error(err: DbErr, customer_id: &CustomerId) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DomainError::Validation(format!("Customer (owner) {} not found", customer_id))
        }
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<pets::Model> for Pet {
    fn from(model: pets::Model) -> Self {
        Pet {
            id: PetId(model.id),
            name: model.name,
            species: model.species,
            breed: model.breed,
            age: model.age,
            customer_id: CustomerId(model.customer_id),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
