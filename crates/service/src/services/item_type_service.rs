use tracing::{info, instrument};

use crate::domain::ItemTypeData;
use crate::dto::{map_all, ItemTypeDto};
use crate::errors::ServiceError;
use crate::store::SharedStore;
use crate::validation::validate_unique;

pub const CREATED: &str = "Item Type Created";
pub const UPDATED: &str = "The Item Type has been updated.";

pub struct ItemTypeService {
    store: SharedStore,
}

impl ItemTypeService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<ItemTypeDto>, ServiceError> {
        let types = self.store.get_item_types().await?;
        if types.is_empty() {
            return Err(ServiceError::none_at_all("item types"));
        }
        Ok(map_all(types))
    }

    pub async fn get(&self, id: i32) -> Result<ItemTypeDto, ServiceError> {
        self.store
            .get_item_type(id)
            .await?
            .map(ItemTypeDto::from)
            .ok_or_else(|| ServiceError::none_for_id("item type", id))
    }

    /// Rejects missing fields first, then an exact name+model+manufacturer match.
    #[instrument(skip(self, data))]
    pub async fn create(&self, data: ItemTypeData) -> Result<&'static str, ServiceError> {
        let candidate = data.validate()?;
        let existing = self.store.get_item_types().await?;
        if !validate_unique(&candidate, &existing) {
            info!(name = %candidate.name, model = %candidate.model, manufacturer = %candidate.manufacturer, "duplicate item type rejected");
            return Err(ServiceError::Duplicate("An item type with the same name, model and manufacturer already exists.".into()));
        }
        let created = self.store.add_item_type(candidate).await?;
        info!(id = created.id, "item type created");
        Ok(CREATED)
    }

    /// A missing target is a bad request here, not a not-found.
    #[instrument(skip(self, data))]
    pub async fn replace(&self, id: i32, data: ItemTypeData) -> Result<&'static str, ServiceError> {
        let replacement = data.validate()?;
        match self.store.replace_item_type(id, replacement).await? {
            Some(_) => {
                info!(id, "item type replaced");
                Ok(UPDATED)
            }
            None => Err(ServiceError::TargetMissing(format!("Item type with id {} does not exist.", id))),
        }
    }
}
