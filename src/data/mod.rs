//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain: the event store (killmail facts), the entity
//! directory (cached game entities), price snapshots, and the versioned
//! materialized views derived from all of them.

pub mod eve;
pub mod killmail;
pub mod price;
pub mod view;
