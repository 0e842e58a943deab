use tracing::debug;

use crate::dto::{map_all, ItemDto};
use crate::errors::ServiceError;
use crate::references::{detach_all, detach_item_type_items};
use crate::store::SharedStore;

/// Read side for items. Every item is cut from its item type's
/// back-collection before mapping.
pub struct ItemService {
    store: SharedStore,
}

impl ItemService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<ItemDto>, ServiceError> {
        let items = self.store.get_items().await?;
        if items.is_empty() {
            return Err(ServiceError::none_at_all("items"));
        }
        debug!(count = items.len(), "mapping items");
        Ok(map_all(detach_all(items)))
    }

    pub async fn get(&self, id: i32) -> Result<ItemDto, ServiceError> {
        let item = self
            .store
            .get_item(id)
            .await?
            .ok_or_else(|| ServiceError::none_for_id("item", id))?;
        Ok(detach_item_type_items(item).into())
    }
}
