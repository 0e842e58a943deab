//! Store whose every call fails with `ServiceError::Db`, for exercising the
//! store-fault path. Only compiled with the `testing` feature.

use async_trait::async_trait;

use crate::domain::{Customer, Fault, Item, ItemType, NewItemType, NewResolution, Repair, Resolution};
use crate::errors::ServiceError;
use crate::store::TrackerStore;

pub struct FailingTrackerStore {
    reason: String,
}

impl FailingTrackerStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn fail<T>(&self) -> Result<T, ServiceError> {
        Err(ServiceError::Db(self.reason.clone()))
    }
}

#[async_trait]
impl TrackerStore for FailingTrackerStore {
    async fn get_customer(&self, _id: i32) -> Result<Option<Customer>, ServiceError> { self.fail() }
    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError> { self.fail() }
    async fn get_customer_repairs(&self, _customer_id: i32) -> Result<Vec<Repair>, ServiceError> { self.fail() }

    async fn get_fault(&self, _id: i32) -> Result<Option<Fault>, ServiceError> { self.fail() }
    async fn get_faults(&self) -> Result<Vec<Fault>, ServiceError> { self.fail() }

    async fn get_item(&self, _id: i32) -> Result<Option<Item>, ServiceError> { self.fail() }
    async fn get_items(&self) -> Result<Vec<Item>, ServiceError> { self.fail() }

    async fn get_item_type(&self, _id: i32) -> Result<Option<ItemType>, ServiceError> { self.fail() }
    async fn get_item_types(&self) -> Result<Vec<ItemType>, ServiceError> { self.fail() }
    async fn add_item_type(&self, _item_type: NewItemType) -> Result<ItemType, ServiceError> { self.fail() }
    async fn replace_item_type(&self, _id: i32, _item_type: NewItemType) -> Result<Option<ItemType>, ServiceError> { self.fail() }

    async fn get_repair(&self, _id: i32) -> Result<Option<Repair>, ServiceError> { self.fail() }
    async fn get_repairs(&self) -> Result<Vec<Repair>, ServiceError> { self.fail() }

    async fn get_resolution(&self, _id: i32) -> Result<Option<Resolution>, ServiceError> { self.fail() }
    async fn get_resolutions(&self) -> Result<Vec<Resolution>, ServiceError> { self.fail() }
    async fn add_resolution(&self, _resolution: NewResolution) -> Result<Resolution, ServiceError> { self.fail() }
    async fn replace_resolution(&self, _id: i32, _resolution: NewResolution) -> Result<Option<Resolution>, ServiceError> { self.fail() }
}
