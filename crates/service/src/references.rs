//! Cutting the ItemType -> Items back-collection before an item is serialized.

use crate::domain::Item;

/// Drop the attached item type's `items` so the item graph is acyclic.
///
/// Takes the item by value: whatever the store handed out is this item's own
/// copy, so the cut cannot leak into any other item.
pub fn detach_item_type_items(mut item: Item) -> Item {
    if let Some(item_type) = item.item_type.as_mut() {
        item_type.items = None;
    }
    item
}

/// Cut every item independently, keeping order.
pub fn detach_all(items: Vec<Item>) -> Vec<Item> {
    items.into_iter().map(detach_item_type_items).collect()
}
