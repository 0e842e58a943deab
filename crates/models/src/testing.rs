//! Helpers for standing up a throwaway SQLite database from the entity definitions.
//! Only compiled with the `testing` feature; production schemas are managed outside this crate.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use crate::{customer, fault, item, item_type, repair, resolution};

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), sea_orm::DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Create all tracker tables, parents before children.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    let schema = Schema::new(db.get_database_backend());
    create_table(db, &schema, customer::Entity).await?;
    create_table(db, &schema, fault::Entity).await?;
    create_table(db, &schema, item_type::Entity).await?;
    create_table(db, &schema, resolution::Entity).await?;
    create_table(db, &schema, item::Entity).await?;
    create_table(db, &schema, repair::Entity).await?;
    Ok(())
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn sqlite_memory() -> Result<DatabaseConnection, sea_orm::DbErr> {
    // a second pooled connection would open a different in-memory database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    create_schema(&db).await?;
    Ok(db)
}
