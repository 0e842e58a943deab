use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::{Customer, Fault, Item, ItemType, NewItemType, NewResolution, Repair, Resolution};
use crate::errors::ServiceError;
use crate::store::{fixtures, TrackerStore};

/// Collections that can be emptied on a seeded store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Customers,
    Faults,
    ItemTypes,
    Items,
    Repairs,
    Resolutions,
}

/// Vec-backed store. Items and repairs hold only foreign keys; relations are
/// attached on read, each caller getting its own copies.
#[derive(Default)]
pub struct InMemoryTrackerStore {
    customers: Mutex<Vec<Customer>>,
    faults: Mutex<Vec<Fault>>,
    item_types: Mutex<Vec<ItemType>>,
    items: Mutex<Vec<Item>>,
    repairs: Mutex<Vec<Repair>>,
    resolutions: Mutex<Vec<Resolution>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

impl InMemoryTrackerStore {
    /// Empty store.
    pub fn new() -> Self { Self::default() }

    /// Store preloaded with the standard fixture data.
    pub fn seeded() -> Self {
        Self {
            customers: Mutex::new(fixtures::customers()),
            faults: Mutex::new(fixtures::faults()),
            item_types: Mutex::new(fixtures::item_types()),
            items: Mutex::new(fixtures::items()),
            repairs: Mutex::new(fixtures::repairs()),
            resolutions: Mutex::new(fixtures::resolutions()),
        }
    }

    /// Clear one collection, builder style.
    pub fn without(self, collection: Collection) -> Self {
        match collection {
            Collection::Customers => lock(&self.customers).clear(),
            Collection::Faults => lock(&self.faults).clear(),
            Collection::ItemTypes => lock(&self.item_types).clear(),
            Collection::Items => lock(&self.items).clear(),
            Collection::Repairs => lock(&self.repairs).clear(),
            Collection::Resolutions => lock(&self.resolutions).clear(),
        }
        self
    }

    pub fn with_item_types(self, item_types: Vec<ItemType>) -> Self {
        *lock(&self.item_types) = item_types;
        self
    }

    pub fn item_type_count(&self) -> usize { lock(&self.item_types).len() }

    /// Attach the item type, with its full back-collection, the way an ORM
    /// relationship fix-up would.
    fn hydrate_item(&self, mut item: Item) -> Item {
        let items = lock(&self.items);
        let types = lock(&self.item_types);
        item.item_type = types.iter().find(|t| t.id == item.item_type_id).map(|t| {
            let mut t = t.clone();
            t.items = Some(items.iter().filter(|i| i.item_type_id == t.id).cloned().collect());
            t
        });
        item
    }

    fn hydrate_repair(&self, mut repair: Repair) -> Repair {
        repair.customer = lock(&self.customers).iter().find(|c| c.id == repair.customer_id).cloned();
        repair
    }
}

#[async_trait]
impl TrackerStore for InMemoryTrackerStore {
    async fn get_customer(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        Ok(lock(&self.customers).iter().find(|c| c.id == id).cloned())
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(lock(&self.customers).clone())
    }

    async fn get_customer_repairs(&self, customer_id: i32) -> Result<Vec<Repair>, ServiceError> {
        let owned: Vec<Repair> = lock(&self.repairs).iter().filter(|r| r.customer_id == customer_id).cloned().collect();
        Ok(owned.into_iter().map(|r| self.hydrate_repair(r)).collect())
    }

    async fn get_fault(&self, id: i32) -> Result<Option<Fault>, ServiceError> {
        Ok(lock(&self.faults).iter().find(|f| f.id == id).cloned())
    }

    async fn get_faults(&self) -> Result<Vec<Fault>, ServiceError> {
        Ok(lock(&self.faults).clone())
    }

    async fn get_item(&self, id: i32) -> Result<Option<Item>, ServiceError> {
        let found = lock(&self.items).iter().find(|i| i.id == id).cloned();
        Ok(found.map(|i| self.hydrate_item(i)))
    }

    async fn get_items(&self) -> Result<Vec<Item>, ServiceError> {
        let all = lock(&self.items).clone();
        Ok(all.into_iter().map(|i| self.hydrate_item(i)).collect())
    }

    async fn get_item_type(&self, id: i32) -> Result<Option<ItemType>, ServiceError> {
        Ok(lock(&self.item_types).iter().find(|t| t.id == id).cloned())
    }

    async fn get_item_types(&self) -> Result<Vec<ItemType>, ServiceError> {
        Ok(lock(&self.item_types).clone())
    }

    async fn add_item_type(&self, it: NewItemType) -> Result<ItemType, ServiceError> {
        let mut types = lock(&self.item_types);
        let created = ItemType {
            id: next_id(types.iter().map(|t| t.id)),
            name: it.name,
            model: it.model,
            manufacturer: it.manufacturer,
            items: None,
        };
        types.push(created.clone());
        Ok(created)
    }

    async fn replace_item_type(&self, id: i32, it: NewItemType) -> Result<Option<ItemType>, ServiceError> {
        let mut types = lock(&self.item_types);
        Ok(types.iter_mut().find(|t| t.id == id).map(|t| {
            t.name = it.name;
            t.model = it.model;
            t.manufacturer = it.manufacturer;
            t.clone()
        }))
    }

    async fn get_repair(&self, id: i32) -> Result<Option<Repair>, ServiceError> {
        let found = lock(&self.repairs).iter().find(|r| r.id == id).cloned();
        Ok(found.map(|r| self.hydrate_repair(r)))
    }

    async fn get_repairs(&self) -> Result<Vec<Repair>, ServiceError> {
        let all = lock(&self.repairs).clone();
        Ok(all.into_iter().map(|r| self.hydrate_repair(r)).collect())
    }

    async fn get_resolution(&self, id: i32) -> Result<Option<Resolution>, ServiceError> {
        Ok(lock(&self.resolutions).iter().find(|r| r.id == id).cloned())
    }

    async fn get_resolutions(&self) -> Result<Vec<Resolution>, ServiceError> {
        Ok(lock(&self.resolutions).clone())
    }

    async fn add_resolution(&self, r: NewResolution) -> Result<Resolution, ServiceError> {
        let mut resolutions = lock(&self.resolutions);
        let created = Resolution { id: next_id(resolutions.iter().map(|x| x.id)), name: r.name, description: r.description };
        resolutions.push(created.clone());
        Ok(created)
    }

    async fn replace_resolution(&self, id: i32, r: NewResolution) -> Result<Option<Resolution>, ServiceError> {
        let mut resolutions = lock(&self.resolutions);
        Ok(resolutions.iter_mut().find(|x| x.id == id).map(|x| {
            x.name = r.name;
            x.description = r.description;
            x.clone()
        }))
    }
}
