use thiserror::Error;

/// Structural validation failures for a single killmail payload.
///
/// These reject exactly one ingest call; the payload is not retried
/// automatically and unrelated killmails are unaffected.
#[derive(Error, Debug)]
pub enum IngestError {
    /// A required field is missing or empty.
    #[error("killmail payload is missing required field: {0}")]
    MissingField(&'static str),
    /// More than one attacker claims the final blow.
    #[error("killmail {0} has more than one final-blow attacker")]
    MultipleFinalBlows(i64),
    /// An item row with neither dropped nor destroyed quantity carries no fact.
    #[error("killmail {killmail_id} item of type {type_id} has zero dropped and destroyed quantity")]
    EmptyItem {
        /// External killmail id.
        killmail_id: i64,
        /// Item type id of the offending row.
        type_id: i64,
    },
}
