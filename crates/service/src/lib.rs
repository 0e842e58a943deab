//! Service layer for the repair tracker.
//! - `store` is the persistence seam (SeaORM adapter and in-memory fixture).
//! - `validation`, `references` and `dto` hold the read/validate/map pipeline.
//! - `services` orchestrates it per entity and classifies the outcome.

pub mod errors;
pub mod domain;
pub mod validation;
pub mod references;
pub mod dto;
pub mod store;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use services::Tracker;
