//! Input checks run before a create or replace reaches the store.

use crate::domain::{ItemType, ItemTypeData, NewItemType, NewResolution, Resolution, ResolutionData};
use crate::errors::ServiceError;

/// Fields that together identify a record for duplicate detection.
pub trait UniqueKey {
    fn unique_key(&self) -> Vec<&str>;
}

impl UniqueKey for ItemType {
    fn unique_key(&self) -> Vec<&str> { vec![self.name.as_str(), self.model.as_str(), self.manufacturer.as_str()] }
}

impl UniqueKey for NewItemType {
    fn unique_key(&self) -> Vec<&str> { vec![self.name.as_str(), self.model.as_str(), self.manufacturer.as_str()] }
}

impl UniqueKey for Resolution {
    fn unique_key(&self) -> Vec<&str> { vec![self.name.as_str(), self.description.as_str()] }
}

impl UniqueKey for NewResolution {
    fn unique_key(&self) -> Vec<&str> { vec![self.name.as_str(), self.description.as_str()] }
}

/// `true` when no element of `existing` matches every key field of `candidate`.
/// Comparison is exact and case-sensitive.
pub fn validate_unique<C, E>(candidate: &C, existing: &[E]) -> bool
where
    C: UniqueKey + ?Sized,
    E: UniqueKey,
{
    let key = candidate.unique_key();
    !existing.iter().any(|e| e.unique_key() == key)
}

/// Trimmed-empty and missing both count as absent.
pub fn require_field(field: &str, value: Option<&str>) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ServiceError::required(field)),
    }
}

impl ItemTypeData {
    pub fn validate(&self) -> Result<NewItemType, ServiceError> {
        Ok(NewItemType {
            name: require_field("name", self.name.as_deref())?,
            model: require_field("model", self.model.as_deref())?,
            manufacturer: require_field("manufacturer", self.manufacturer.as_deref())?,
        })
    }
}

impl ResolutionData {
    pub fn validate(&self) -> Result<NewResolution, ServiceError> {
        Ok(NewResolution {
            name: require_field("name", self.name.as_deref())?,
            description: require_field("description", self.description.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_type(id: i32, name: &str, model: &str, manufacturer: &str) -> ItemType {
        ItemType { id, name: name.into(), model: model.into(), manufacturer: manufacturer.into(), items: None }
    }

    fn new_item_type(name: &str, model: &str, manufacturer: &str) -> NewItemType {
        NewItemType { name: name.into(), model: model.into(), manufacturer: manufacturer.into() }
    }

    #[test]
    fn exact_match_is_not_unique() {
        let existing = vec![item_type(1, "A", "M", "X")];
        assert!(!validate_unique(&new_item_type("A", "M", "X"), &existing));
    }

    #[test]
    fn any_differing_key_field_is_unique() {
        let existing = vec![item_type(1, "A", "M", "X")];
        assert!(validate_unique(&new_item_type("B", "M", "X"), &existing));
        assert!(validate_unique(&new_item_type("A", "N", "X"), &existing));
        assert!(validate_unique(&new_item_type("A", "M", "Y"), &existing));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let existing = vec![item_type(1, "A", "M", "X")];
        assert!(validate_unique(&new_item_type("a", "M", "X"), &existing));
    }

    #[test]
    fn empty_collection_is_always_unique() {
        let existing: Vec<Resolution> = Vec::new();
        let candidate = NewResolution { name: "n".into(), description: "d".into() };
        assert!(validate_unique(&candidate, &existing));
    }

    #[test]
    fn resolution_key_is_name_and_description() {
        let existing = vec![Resolution { id: 3, name: "Reboot".into(), description: "Power cycle".into() }];
        let same = NewResolution { name: "Reboot".into(), description: "Power cycle".into() };
        let other = NewResolution { name: "Reboot".into(), description: "Cold boot".into() };
        assert!(!validate_unique(&same, &existing));
        assert!(validate_unique(&other, &existing));
    }

    #[test]
    fn missing_or_blank_fields_are_rejected() {
        let data = ItemTypeData { name: Some("A".into()), model: Some("   ".into()), manufacturer: Some("X".into()) };
        assert!(matches!(data.validate(), Err(ServiceError::InvalidInput(msg)) if msg.contains("model")));

        let data = ResolutionData { name: None, description: Some("d".into()) };
        assert!(matches!(data.validate(), Err(ServiceError::InvalidInput(msg)) if msg.contains("name")));
    }

    #[test]
    fn complete_payload_passes() {
        let data = ItemTypeData { name: Some("A".into()), model: Some("M".into()), manufacturer: Some("X".into()) };
        assert_eq!(data.validate().ok(), Some(new_item_type("A", "M", "X")));
    }
}
