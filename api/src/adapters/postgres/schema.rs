//! Table bootstrap
//!
//! Creates the `customers` and `pets` tables (and the owner index) from the
//! SeaORM entity definitions when they do not exist yet.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{customers, pets};

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Parent table first, the pets foreign key references it
    create_table(db, customers::Entity).await?;
    create_table(db, pets::Entity).await?;

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    for mut index in schema.create_index_from_entity(pets::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;

    tracing::debug!(table = entity.table_name(), "Ensured table exists");
    Ok(())
}
