use sea_orm::DbErr;

use super::{esi::EsiError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::EsiError(esi_err) => match esi_err {
                // The service is temporarily unavailable, backoff and retry
                EsiError::Status { status, .. } if status.is_server_error() => {
                    ErrorRetryStrategy::Retry
                }

                // We're making invalid requests, this is a flaw in the code
                // that needs to be fixed
                EsiError::Status { .. } => ErrorRetryStrategy::Fail,

                EsiError::Reqwest(reqwest_error) => {
                    if let Some(status) = reqwest_error.status() {
                        if status.is_server_error() {
                            ErrorRetryStrategy::Retry
                        } else {
                            ErrorRetryStrategy::Fail
                        }
                    } else {
                        // Network error or connection issue - should retry
                        ErrorRetryStrategy::Retry
                    }
                }

                // Deadline exceeded, the service may recover
                EsiError::Timeout(_) => ErrorRetryStrategy::Retry,
            },

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition/connection errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // constraint violations, type conversion errors, schema
                    // errors, record not found. These indicate bugs or data
                    // issues that won't resolve with retry.
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Malformed payloads - permanent failures, never retried
            Self::IngestError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug in killfeed's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,

            // Job scheduler errors - permanent failures (configuration issue)
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
