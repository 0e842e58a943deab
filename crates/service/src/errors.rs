use thiserror::Error;

/// Outcome classification shared by every tracker service.
///
/// Read paths only ever produce `NotFound`; write paths produce the three
/// bad-request flavours. `Db` is a store fault and is never recovered.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    TargetMissing(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn none_for_id(entity: &str, id: i32) -> Self { Self::NotFound(format!("No {} found for id: {}", entity, id)) }

    pub fn none_at_all(entities: &str) -> Self { Self::NotFound(format!("No {} found.", entities)) }

    pub fn required(field: &str) -> Self { Self::InvalidInput(format!("The {} field is required.", field)) }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        let models::errors::ModelError::Db(msg) = e;
        Self::Db(msg)
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_text() {
        assert_eq!(ServiceError::none_for_id("item type", 25).to_string(), "No item type found for id: 25");
        assert_eq!(ServiceError::none_at_all("resolutions").to_string(), "No resolutions found.");
    }

    #[test]
    fn required_names_the_field() {
        assert!(matches!(ServiceError::required("name"), ServiceError::InvalidInput(ref m) if m == "The name field is required."));
    }

    #[test]
    fn model_errors_become_store_faults() {
        let e: ServiceError = models::errors::ModelError::Db("pool closed".into()).into();
        assert!(matches!(e, ServiceError::Db(ref m) if m == "pool closed"));
    }
}
