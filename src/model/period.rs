use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rolling time window used by stats and leaderboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last hour.
    Hour,
    /// Last 24 hours.
    Day,
    /// Last 168 hours.
    Week,
    /// Last 720 hours.
    Month,
    /// Unbounded.
    All,
}

impl Period {
    /// Window length, or `None` for the unbounded period.
    pub fn window(&self) -> Option<Duration> {
        match self {
            Period::Hour => Some(Duration::hours(1)),
            Period::Day => Some(Duration::hours(24)),
            Period::Week => Some(Duration::hours(168)),
            Period::Month => Some(Duration::hours(720)),
            Period::All => None,
        }
    }

    /// Start of the window relative to `now`, or `None` for unbounded.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<NaiveDateTime> {
        self.window().map(|window| (now - window).naive_utc())
    }
}
