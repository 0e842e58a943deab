use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::repair;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Repair }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Repair => Entity::has_many(repair::Entity).into() }
    }
}

impl Related<repair::Entity> for Entity {
    fn to() -> RelationDef { Relation::Repair.def() }
}

impl ActiveModelBehavior for ActiveModel {}
