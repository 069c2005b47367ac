//! Domain types shared across the engine.
//!
//! Payload shapes accepted at the ingest boundary, time window definitions,
//! space classification, inventory slot grouping, and the aggregated stat
//! records served by the query facade. Every row shape that crosses a storage
//! boundary is an explicit typed record, validated at the write boundary.

pub mod ingest;
pub mod period;
pub mod slot;
pub mod space;
pub mod stats;
