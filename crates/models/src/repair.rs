use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::customer;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repair")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub item_id: Option<i32>,
    pub fault_id: Option<i32>,
    pub resolution_id: Option<i32>,
    pub description: String,
    pub started_on: Date,
    pub completed_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Customer }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}
