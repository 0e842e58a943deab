use crate::dto::{map_all, RepairDto};
use crate::errors::ServiceError;
use crate::store::SharedStore;

pub struct RepairService {
    store: SharedStore,
}

impl RepairService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<RepairDto>, ServiceError> {
        let repairs = self.store.get_repairs().await?;
        if repairs.is_empty() {
            return Err(ServiceError::none_at_all("repairs"));
        }
        Ok(map_all(repairs))
    }

    pub async fn get(&self, id: i32) -> Result<RepairDto, ServiceError> {
        self.store
            .get_repair(id)
            .await?
            .map(RepairDto::from)
            .ok_or_else(|| ServiceError::none_for_id("repair", id))
    }
}
