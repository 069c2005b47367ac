//! Killfeed core: killmail materialization and aggregation engine.
//!
//! This crate ingests immutable EVE Online combat events (killmails), resolves
//! the entities they reference, folds entity, location, and price data into a
//! denormalized row per killmail, and serves windowed statistics and
//! leaderboards by scanning versioned materialized views. Presentation (HTTP
//! routing, templating, sessions) lives outside this crate and consumes the
//! read-only query facade.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod esi;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
