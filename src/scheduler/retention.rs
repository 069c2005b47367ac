//! Retention pruning pass.

use chrono::{Duration, Utc};

use crate::data::killmail::KillmailRepository;
use crate::data::view::{KillmailViewRepository, ParticipantRepository};
use crate::error::Error;
use crate::scheduler::JobContext;

/// Deletes killmails older than the configured age, along with their derived
/// view and participant rows. This is the only deletion path for event facts.
pub async fn run(context: JobContext) -> Result<u64, Error> {
    let cutoff = (Utc::now() - Duration::days(context.retention_days)).naive_utc();

    let killmails = KillmailRepository::new(&context.db)
        .prune_older_than(cutoff)
        .await?;
    let views = KillmailViewRepository::new(&context.db)
        .delete_before(cutoff)
        .await?;
    let participants = ParticipantRepository::new(&context.db)
        .delete_before(cutoff)
        .await?;

    tracing::info!(killmails, views, participants, "retention pass complete");

    Ok(killmails + views + participants)
}
