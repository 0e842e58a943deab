use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{errors, item};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Item }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Item => Entity::has_many(item::Entity).into() }
    }
}

impl Related<item::Entity> for Entity {
    fn to() -> RelationDef { Relation::Item.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, name: &str, model: &str, manufacturer: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        model: Set(model.to_string()),
        manufacturer: Set(manufacturer.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every column of an existing row; `Ok(None)` when the id is unknown.
pub async fn replace(db: &DatabaseConnection, id: i32, name: &str, model: &str, manufacturer: &str) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.model = Set(model.to_string());
    am.manufacturer = Set(manufacturer.to_string());
    let updated = am.update(db).await?;
    Ok(Some(updated))
}
