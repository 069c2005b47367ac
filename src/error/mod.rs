//! Error types for the killfeed engine.
//!
//! A single top-level [`Error`] aggregates the domain-specific error enums and
//! external library errors via `thiserror`'s `#[from]`, so services can
//! propagate with `?`. Retry classification lives in [`retry`].

pub mod config;
pub mod esi;
pub mod ingest;
pub mod retry;

use thiserror::Error;

pub use crate::error::{config::ConfigError, esi::EsiError, ingest::IngestError};

/// Main error type for the killfeed engine.
///
/// Failures local to a single killmail or entity lookup are handled inside the
/// services (placeholder + backfill marker, zero-value price) and never reach
/// this type; what does reach it is surfaced to the caller rather than
/// silently defaulted.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed killmail payload (fatal to that single ingest call only).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// External game-data service error (requests, status codes, timeouts).
    #[error(transparent)]
    EsiError(#[from] EsiError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in killfeed's code.
    #[error("Internal error in killfeed, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
