pub mod backfill {
    /// Cron expression for the placeholder backfill pass.
    /// Runs every 10 minutes at the top of the minute.
    pub const CRON_EXPRESSION: &str = "0 */10 * * * *";

    /// View rows re-resolved and re-denormalized per run.
    pub const BATCH_LIMIT: u64 = 200;
}

pub mod retention {
    /// Cron expression for the retention pruning pass.
    /// Runs daily at 03:30 UTC.
    pub const CRON_EXPRESSION: &str = "0 30 3 * * *";
}

pub mod price_refresh {
    /// Cron expression for the market history refresh pass.
    /// Runs every 2 hours at quarter past.
    pub const CRON_EXPRESSION: &str = "0 15 */2 * * *";

    /// Distinct recently seen types refreshed per run.
    pub const TYPE_LIMIT: u64 = 100;

    /// How far back to look for recently seen types.
    pub const LOOKBACK_HOURS: i64 = 24;
}
