//! Wire representations. Each conversion picks a fixed set of fields and
//! renames them; nested entities go through their own conversion.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Customer, Fault, Item, ItemType, Repair, Resolution};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CustomerDto {
    #[serde(rename = "customerId")]
    pub customer_id: i32,
    #[serde(rename = "customerFirstName")]
    pub first_name: String,
    #[serde(rename = "customerLastName")]
    pub last_name: String,
    #[serde(rename = "customerEmail")]
    pub email: String,
    #[serde(rename = "customerPhone")]
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaultDto {
    #[serde(rename = "faultId")]
    pub fault_id: i32,
    #[serde(rename = "faultName")]
    pub name: String,
    #[serde(rename = "faultDescription")]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemTypeDto {
    #[serde(rename = "itemTypeId")]
    pub item_type_id: i32,
    #[serde(rename = "itemTypeName")]
    pub name: String,
    #[serde(rename = "itemTypeModel")]
    pub model: String,
    #[serde(rename = "itemTypeManufacturer")]
    pub manufacturer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemDto>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemDto {
    #[serde(rename = "itemId")]
    pub item_id: i32,
    #[serde(rename = "itemSerialNumber")]
    pub serial_number: String,
    #[serde(rename = "itemDescription")]
    pub description: String,
    #[serde(rename = "itemType", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemTypeDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepairDto {
    #[serde(rename = "repairId")]
    pub repair_id: i32,
    #[serde(rename = "repairDescription")]
    pub description: String,
    #[serde(rename = "repairStartedOn")]
    pub started_on: NaiveDate,
    #[serde(rename = "repairCompletedOn")]
    pub completed_on: Option<NaiveDate>,
    #[serde(rename = "repairItemId")]
    pub item_id: Option<i32>,
    #[serde(rename = "repairFaultId")]
    pub fault_id: Option<i32>,
    #[serde(rename = "repairResolutionId")]
    pub resolution_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolutionDto {
    #[serde(rename = "resolutionId")]
    pub resolution_id: i32,
    #[serde(rename = "resolutionName")]
    pub name: String,
    #[serde(rename = "resolutionDescription")]
    pub description: String,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self { customer_id: c.id, first_name: c.first_name, last_name: c.last_name, email: c.email, phone: c.phone }
    }
}

impl From<Fault> for FaultDto {
    fn from(f: Fault) -> Self {
        Self { fault_id: f.id, name: f.name, description: f.description }
    }
}

impl ItemTypeDto {
    /// Scalar-only view used when an item type is nested under an item.
    /// Never carries `items`, whatever the source holds.
    pub fn summary(t: ItemType) -> Self {
        Self { item_type_id: t.id, name: t.name, model: t.model, manufacturer: t.manufacturer, items: None }
    }
}

impl From<ItemType> for ItemTypeDto {
    fn from(mut t: ItemType) -> Self {
        let items = t.items.take().map(|items| items.into_iter().map(ItemDto::from).collect());
        Self { items, ..Self::summary(t) }
    }
}

impl From<Item> for ItemDto {
    fn from(i: Item) -> Self {
        Self {
            item_id: i.id,
            serial_number: i.serial_number,
            description: i.description,
            item_type: i.item_type.map(ItemTypeDto::summary),
        }
    }
}

impl From<Repair> for RepairDto {
    fn from(r: Repair) -> Self {
        Self {
            repair_id: r.id,
            description: r.description,
            started_on: r.started_on,
            completed_on: r.completed_on,
            item_id: r.item_id,
            fault_id: r.fault_id,
            resolution_id: r.resolution_id,
            customer: r.customer.map(CustomerDto::from),
        }
    }
}

impl From<Resolution> for ResolutionDto {
    fn from(r: Resolution) -> Self {
        Self { resolution_id: r.id, name: r.name, description: r.description }
    }
}

/// Map a whole collection in order.
pub fn map_all<S, D: From<S>>(source: Vec<S>) -> Vec<D> {
    source.into_iter().map(D::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn printer() -> ItemType {
        ItemType { id: 1, name: "Printer".into(), model: "LaserJet".into(), manufacturer: "HP".into(), items: None }
    }

    fn item(id: i32, item_type: Option<ItemType>) -> Item {
        Item { id, serial_number: format!("SN-{id}"), description: "office printer".into(), item_type_id: 1, item_type }
    }

    #[test]
    fn resolution_uses_wire_names() -> anyhow::Result<()> {
        let dto = ResolutionDto::from(Resolution { id: 4, name: "Reboot".into(), description: "Power cycle".into() });
        assert_eq!(
            serde_json::to_value(&dto)?,
            json!({"resolutionId": 4, "resolutionName": "Reboot", "resolutionDescription": "Power cycle"})
        );
        Ok(())
    }

    #[test]
    fn nested_item_type_never_carries_items() -> anyhow::Result<()> {
        let mut it = printer();
        it.items = Some(vec![item(1, None), item(2, None)]);
        let value = serde_json::to_value(ItemDto::from(item(1, Some(it))))?;

        assert_eq!(value["itemType"]["itemTypeName"], "Printer");
        assert_eq!(value["itemType"]["itemTypeManufacturer"], "HP");
        assert!(value["itemType"].get("items").is_none());
        Ok(())
    }

    #[test]
    fn top_level_item_type_lists_loaded_items_without_recursion() -> anyhow::Result<()> {
        let mut it = printer();
        it.items = Some(vec![item(1, Some(printer())), item(2, None)]);
        let value = serde_json::to_value(ItemTypeDto::from(it))?;

        let items = value["items"].as_array().cloned().unwrap_or_default();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["itemId"], 1);
        assert!(items[0]["itemType"].get("items").is_none());
        Ok(())
    }

    #[test]
    fn unloaded_relations_are_omitted() -> anyhow::Result<()> {
        let value = serde_json::to_value(ItemTypeDto::from(printer()))?;
        assert!(value.get("items").is_none());

        let value = serde_json::to_value(ItemDto::from(item(3, None)))?;
        assert!(value.get("itemType").is_none());
        Ok(())
    }

    #[test]
    fn repair_embeds_customer_and_formats_dates() -> anyhow::Result<()> {
        let repair = Repair {
            id: 9,
            customer_id: 2,
            item_id: Some(1),
            fault_id: None,
            resolution_id: None,
            description: "won't power on".into(),
            started_on: NaiveDate::from_ymd_opt(2024, 5, 6).ok_or_else(|| anyhow::anyhow!("date"))?,
            completed_on: None,
            customer: Some(Customer { id: 2, first_name: "Ana".into(), last_name: "Ruiz".into(), email: "ana@example.com".into(), phone: "555-0102".into() }),
        };
        let value = serde_json::to_value(RepairDto::from(repair))?;
        assert_eq!(value["repairStartedOn"], "2024-05-06");
        assert!(value["repairCompletedOn"].is_null());
        assert_eq!(value["customer"]["customerId"], 2);
        Ok(())
    }
}
