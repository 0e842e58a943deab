use tracing::{info, instrument};

use crate::domain::ResolutionData;
use crate::dto::{map_all, ResolutionDto};
use crate::errors::ServiceError;
use crate::store::SharedStore;
use crate::validation::validate_unique;

pub const CREATED: &str = "Resolution Created";
pub const UPDATED: &str = "The Resolution has been updated.";

pub struct ResolutionService {
    store: SharedStore,
}

impl ResolutionService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<ResolutionDto>, ServiceError> {
        let resolutions = self.store.get_resolutions().await?;
        if resolutions.is_empty() {
            return Err(ServiceError::none_at_all("resolutions"));
        }
        Ok(map_all(resolutions))
    }

    pub async fn get(&self, id: i32) -> Result<ResolutionDto, ServiceError> {
        self.store
            .get_resolution(id)
            .await?
            .map(ResolutionDto::from)
            .ok_or_else(|| ServiceError::none_for_id("resolution", id))
    }

    #[instrument(skip(self, data))]
    pub async fn create(&self, data: ResolutionData) -> Result<&'static str, ServiceError> {
        let candidate = data.validate()?;
        let existing = self.store.get_resolutions().await?;
        if !validate_unique(&candidate, &existing) {
            info!(name = %candidate.name, "duplicate resolution rejected");
            return Err(ServiceError::Duplicate("A resolution with the same name and description already exists.".into()));
        }
        let created = self.store.add_resolution(candidate).await?;
        info!(id = created.id, "resolution created");
        Ok(CREATED)
    }

    #[instrument(skip(self, data))]
    pub async fn replace(&self, id: i32, data: ResolutionData) -> Result<&'static str, ServiceError> {
        let replacement = data.validate()?;
        self.store
            .replace_resolution(id, replacement)
            .await?
            .map(|_| UPDATED)
            .ok_or_else(|| ServiceError::TargetMissing(format!("Resolution with id {} does not exist.", id)))
    }
}
