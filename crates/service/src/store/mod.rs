//! Persistence seam for the tracker services.
//!
//! `seaorm` talks to the relational database, `memory` is a seeded fixture
//! for tests and database-less runs.

pub mod fixtures;
pub mod memory;
pub mod seaorm;
#[cfg(any(test, feature = "testing"))]
pub mod failing;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Customer, Fault, Item, ItemType, NewItemType, NewResolution, Repair, Resolution};
use crate::errors::ServiceError;

pub use memory::InMemoryTrackerStore;
pub use seaorm::SeaOrmTrackerStore;

/// Lookup-by-id and lookup-all per entity, plus the two write paths.
///
/// Lists come back in store order. `Err` is reserved for access faults;
/// absence is `Ok(None)` / an empty `Vec`.
#[async_trait]
pub trait TrackerStore: Send + Sync {
    async fn get_customer(&self, id: i32) -> Result<Option<Customer>, ServiceError>;
    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn get_customer_repairs(&self, customer_id: i32) -> Result<Vec<Repair>, ServiceError>;

    async fn get_fault(&self, id: i32) -> Result<Option<Fault>, ServiceError>;
    async fn get_faults(&self) -> Result<Vec<Fault>, ServiceError>;

    /// Items come with their item type attached; the item type may carry its back-collection.
    async fn get_item(&self, id: i32) -> Result<Option<Item>, ServiceError>;
    async fn get_items(&self) -> Result<Vec<Item>, ServiceError>;

    async fn get_item_type(&self, id: i32) -> Result<Option<ItemType>, ServiceError>;
    async fn get_item_types(&self) -> Result<Vec<ItemType>, ServiceError>;
    async fn add_item_type(&self, item_type: NewItemType) -> Result<ItemType, ServiceError>;
    /// `Ok(None)` when `id` does not exist.
    async fn replace_item_type(&self, id: i32, item_type: NewItemType) -> Result<Option<ItemType>, ServiceError>;

    async fn get_repair(&self, id: i32) -> Result<Option<Repair>, ServiceError>;
    async fn get_repairs(&self) -> Result<Vec<Repair>, ServiceError>;

    async fn get_resolution(&self, id: i32) -> Result<Option<Resolution>, ServiceError>;
    async fn get_resolutions(&self) -> Result<Vec<Resolution>, ServiceError>;
    async fn add_resolution(&self, resolution: NewResolution) -> Result<Resolution, ServiceError>;
    async fn replace_resolution(&self, id: i32, resolution: NewResolution) -> Result<Option<Resolution>, ServiceError>;
}

pub type SharedStore = Arc<dyn TrackerStore>;
