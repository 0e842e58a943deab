pub mod errors;
pub mod db;
pub mod customer;
pub mod fault;
pub mod item_type;
pub mod item;
pub mod repair;
pub mod resolution;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
