//! One service per entity: store lookup, reference cut, mapping, outcome.

pub mod customer_service;
pub mod fault_service;
pub mod item_service;
pub mod item_type_service;
pub mod repair_service;
pub mod resolution_service;


use std::sync::Arc;

use crate::store::SharedStore;

pub use customer_service::CustomerService;
pub use fault_service::FaultService;
pub use item_service::ItemService;
pub use item_type_service::ItemTypeService;
pub use repair_service::RepairService;
pub use resolution_service::ResolutionService;

/// All tracker services sharing one store.
pub struct Tracker {
    pub customers: CustomerService,
    pub faults: FaultService,
    pub items: ItemService,
    pub item_types: ItemTypeService,
    pub repairs: RepairService,
    pub resolutions: ResolutionService,
}

impl Tracker {
    pub fn new(store: SharedStore) -> Self {
        Self {
            customers: CustomerService::new(Arc::clone(&store)),
            faults: FaultService::new(Arc::clone(&store)),
            items: ItemService::new(Arc::clone(&store)),
            item_types: ItemTypeService::new(Arc::clone(&store)),
            repairs: RepairService::new(Arc::clone(&store)),
            resolutions: ResolutionService::new(store),
        }
    }
}
