//! Service layer.
//!
//! Ingestion (two-phase: resolve references, then append + materialize),
//! entity directory resolution, price lookups, denormalization, windowed
//! aggregation, leaderboards, and the read-only query facade consumed by the
//! presentation layer.

pub mod denormalize;
pub mod directory;
pub mod ingest;
pub mod leaderboard;
pub mod price;
pub mod query;
pub mod stats;
