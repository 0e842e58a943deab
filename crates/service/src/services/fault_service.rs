use crate::dto::{map_all, FaultDto};
use crate::errors::ServiceError;
use crate::store::SharedStore;

pub struct FaultService {
    store: SharedStore,
}

impl FaultService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<FaultDto>, ServiceError> {
        let faults = self.store.get_faults().await?;
        if faults.is_empty() {
            return Err(ServiceError::none_at_all("faults"));
        }
        Ok(map_all(faults))
    }

    pub async fn get(&self, id: i32) -> Result<FaultDto, ServiceError> {
        self.store
            .get_fault(id)
            .await?
            .map(FaultDto::from)
            .ok_or_else(|| ServiceError::none_for_id("fault", id))
    }
}
