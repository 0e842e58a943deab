use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::item_type;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub serial_number: String,
    pub description: String,
    pub item_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ItemType }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ItemType => Entity::belongs_to(item_type::Entity)
                .from(Column::ItemTypeId)
                .to(item_type::Column::Id)
                .into(),
        }
    }
}

impl Related<item_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::ItemType.def() }
}

impl ActiveModelBehavior for ActiveModel {}
