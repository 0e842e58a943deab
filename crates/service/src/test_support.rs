#![cfg(test)]
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::store::fixtures;

/// In-memory SQLite database holding the standard fixture rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::testing::sqlite_memory().await?;

    for c in fixtures::customers() {
        models::customer::ActiveModel {
            id: Set(c.id),
            first_name: Set(c.first_name),
            last_name: Set(c.last_name),
            email: Set(c.email),
            phone: Set(c.phone),
        }
        .insert(&db)
        .await?;
    }
    for f in fixtures::faults() {
        models::fault::ActiveModel { id: Set(f.id), name: Set(f.name), description: Set(f.description) }.insert(&db).await?;
    }
    for t in fixtures::item_types() {
        models::item_type::ActiveModel { id: Set(t.id), name: Set(t.name), model: Set(t.model), manufacturer: Set(t.manufacturer) }
            .insert(&db)
            .await?;
    }
    for r in fixtures::resolutions() {
        models::resolution::ActiveModel { id: Set(r.id), name: Set(r.name), description: Set(r.description) }.insert(&db).await?;
    }
    for i in fixtures::items() {
        models::item::ActiveModel {
            id: Set(i.id),
            serial_number: Set(i.serial_number),
            description: Set(i.description),
            item_type_id: Set(i.item_type_id),
        }
        .insert(&db)
        .await?;
    }
    for r in fixtures::repairs() {
        models::repair::ActiveModel {
            id: Set(r.id),
            customer_id: Set(r.customer_id),
            item_id: Set(r.item_id),
            fault_id: Set(r.fault_id),
            resolution_id: Set(r.resolution_id),
            description: Set(r.description),
            started_on: Set(r.started_on),
            completed_on: Set(r.completed_on),
        }
        .insert(&db)
        .await?;
    }
    Ok(db)
}
