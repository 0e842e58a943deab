use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use models::{customer, fault, item, item_type, repair, resolution};

use crate::domain::{Customer, Fault, Item, ItemType, NewItemType, NewResolution, Repair, Resolution};
use crate::errors::ServiceError;
use crate::store::TrackerStore;

/// SeaORM-backed store implementation.
pub struct SeaOrmTrackerStore {
    pub db: DatabaseConnection,
}

impl SeaOrmTrackerStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Rebuild the graph the way a tracking ORM would: each loaded item type gets
/// the loaded items that reference it as its back-collection.
fn link_items(rows: Vec<(item::Model, Option<item_type::Model>)>) -> Vec<Item> {
    let mut siblings: HashMap<i32, Vec<Item>> = HashMap::new();
    for (row, _) in &rows {
        siblings.entry(row.item_type_id).or_default().push(Item::from(row.clone()));
    }
    rows.into_iter()
        .map(|(row, t)| {
            let mut it = Item::from(row);
            it.item_type = t.map(|t| {
                let mut t = ItemType::from(t);
                t.items = siblings.get(&t.id).cloned();
                t
            });
            it
        })
        .collect()
}

fn attach_customer((row, c): (repair::Model, Option<customer::Model>)) -> Repair {
    let mut r = Repair::from(row);
    r.customer = c.map(Customer::from);
    r
}

#[async_trait]
impl TrackerStore for SeaOrmTrackerStore {
    async fn get_customer(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        Ok(customer::Entity::find_by_id(id).one(&self.db).await?.map(Customer::from))
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = customer::Entity::find().order_by_asc(customer::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn get_customer_repairs(&self, customer_id: i32) -> Result<Vec<Repair>, ServiceError> {
        let rows = repair::Entity::find()
            .filter(repair::Column::CustomerId.eq(customer_id))
            .order_by_asc(repair::Column::Id)
            .find_also_related(customer::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(attach_customer).collect())
    }

    async fn get_fault(&self, id: i32) -> Result<Option<Fault>, ServiceError> {
        Ok(fault::Entity::find_by_id(id).one(&self.db).await?.map(Fault::from))
    }

    async fn get_faults(&self) -> Result<Vec<Fault>, ServiceError> {
        let rows = fault::Entity::find().order_by_asc(fault::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Fault::from).collect())
    }

    async fn get_item(&self, id: i32) -> Result<Option<Item>, ServiceError> {
        let Some((row, t)) = item::Entity::find_by_id(id)
            .find_also_related(item_type::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        let mut found = Item::from(row);
        if let Some(t) = t {
            let children = item::Entity::find()
                .filter(item::Column::ItemTypeId.eq(t.id))
                .order_by_asc(item::Column::Id)
                .all(&self.db)
                .await?;
            let mut t = ItemType::from(t);
            t.items = Some(children.into_iter().map(Item::from).collect());
            found.item_type = Some(t);
        }
        Ok(Some(found))
    }

    async fn get_items(&self) -> Result<Vec<Item>, ServiceError> {
        let rows = item::Entity::find()
            .find_also_related(item_type::Entity)
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), "loaded items with item types");
        Ok(link_items(rows))
    }

    async fn get_item_type(&self, id: i32) -> Result<Option<ItemType>, ServiceError> {
        Ok(item_type::Entity::find_by_id(id).one(&self.db).await?.map(ItemType::from))
    }

    async fn get_item_types(&self) -> Result<Vec<ItemType>, ServiceError> {
        let rows = item_type::Entity::find().order_by_asc(item_type::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(ItemType::from).collect())
    }

    async fn add_item_type(&self, it: NewItemType) -> Result<ItemType, ServiceError> {
        let created = item_type::create(&self.db, &it.name, &it.model, &it.manufacturer).await?;
        Ok(created.into())
    }

    async fn replace_item_type(&self, id: i32, it: NewItemType) -> Result<Option<ItemType>, ServiceError> {
        let updated = item_type::replace(&self.db, id, &it.name, &it.model, &it.manufacturer).await?;
        Ok(updated.map(ItemType::from))
    }

    async fn get_repair(&self, id: i32) -> Result<Option<Repair>, ServiceError> {
        let found = repair::Entity::find_by_id(id)
            .find_also_related(customer::Entity)
            .one(&self.db)
            .await?;
        Ok(found.map(attach_customer))
    }

    async fn get_repairs(&self) -> Result<Vec<Repair>, ServiceError> {
        let rows = repair::Entity::find()
            .order_by_asc(repair::Column::Id)
            .find_also_related(customer::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(attach_customer).collect())
    }

    async fn get_resolution(&self, id: i32) -> Result<Option<Resolution>, ServiceError> {
        Ok(resolution::Entity::find_by_id(id).one(&self.db).await?.map(Resolution::from))
    }

    async fn get_resolutions(&self) -> Result<Vec<Resolution>, ServiceError> {
        let rows = resolution::Entity::find().order_by_asc(resolution::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Resolution::from).collect())
    }

    async fn add_resolution(&self, r: NewResolution) -> Result<Resolution, ServiceError> {
        let created = resolution::create(&self.db, &r.name, &r.description).await?;
        Ok(created.into())
    }

    async fn replace_resolution(&self, id: i32, r: NewResolution) -> Result<Option<Resolution>, ServiceError> {
        let updated = resolution::replace(&self.db, id, &r.name, &r.description).await?;
        Ok(updated.map(Resolution::from))
    }
}
