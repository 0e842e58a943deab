//! Domain records handed out by a `TrackerStore`.
//!
//! Every value is owned. `ItemType.items` and `Item.item_type` are two
//! independent one-way associations; a store may fill both, which is why items
//! pass through `references::detach_item_type_items` before being mapped.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fault {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemType {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    /// Back-collection. `None` when not loaded or after the cycle has been cut.
    pub items: Option<Vec<Item>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: i32,
    pub serial_number: String,
    pub description: String,
    pub item_type_id: i32,
    pub item_type: Option<ItemType>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Repair {
    pub id: i32,
    pub customer_id: i32,
    pub item_id: Option<i32>,
    pub fault_id: Option<i32>,
    pub resolution_id: Option<i32>,
    pub description: String,
    pub started_on: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub customer: Option<Customer>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Binding target for item type create/replace. Fields stay optional so a
/// missing field reaches validation instead of failing deserialization.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemTypeData {
    #[serde(default, alias = "itemTypeName")]
    pub name: Option<String>,
    #[serde(default, alias = "itemTypeModel")]
    pub model: Option<String>,
    #[serde(default, alias = "itemTypeManufacturer")]
    pub manufacturer: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionData {
    #[serde(default, alias = "resolutionName")]
    pub name: Option<String>,
    #[serde(default, alias = "resolutionDescription")]
    pub description: Option<String>,
}

/// Item type fields after the required-field check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItemType {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewResolution {
    pub name: String,
    pub description: String,
}

impl From<models::customer::Model> for Customer {
    fn from(m: models::customer::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email, phone: m.phone }
    }
}

impl From<models::fault::Model> for Fault {
    fn from(m: models::fault::Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description }
    }
}

impl From<models::item_type::Model> for ItemType {
    fn from(m: models::item_type::Model) -> Self {
        Self { id: m.id, name: m.name, model: m.model, manufacturer: m.manufacturer, items: None }
    }
}

impl From<models::item::Model> for Item {
    fn from(m: models::item::Model) -> Self {
        Self { id: m.id, serial_number: m.serial_number, description: m.description, item_type_id: m.item_type_id, item_type: None }
    }
}

impl From<models::repair::Model> for Repair {
    fn from(m: models::repair::Model) -> Self {
        Self {
            id: m.id,
            customer_id: m.customer_id,
            item_id: m.item_id,
            fault_id: m.fault_id,
            resolution_id: m.resolution_id,
            description: m.description,
            started_on: m.started_on,
            completed_on: m.completed_on,
            customer: None,
        }
    }
}

impl From<models::resolution::Model> for Resolution {
    fn from(m: models::resolution::Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description }
    }
}
