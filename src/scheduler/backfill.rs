//! Placeholder backfill pass.

use crate::data::view::KillmailViewRepository;
use crate::error::{retry::ErrorRetryStrategy, Error};
use crate::scheduler::{config, JobContext};
use crate::service::denormalize::DenormalizeService;
use crate::service::directory::ResolutionCache;

/// Re-resolves and re-denormalizes view rows written with placeholders.
///
/// Each row is just another versioned write, so the pass is idempotent; a row
/// whose references still do not resolve stays marked and is picked up again
/// next run. One failing killmail never aborts the rest of the batch.
pub async fn run(context: JobContext) -> Result<u64, Error> {
    let rows = KillmailViewRepository::new(&context.db)
        .needs_backfill(config::backfill::BATCH_LIMIT)
        .await?;

    let denormalizer =
        DenormalizeService::new(&context.db, &context.esi_client, context.resolve_timeout);
    let mut cache = ResolutionCache::new();
    let mut resolved = 0;

    for row in rows {
        match denormalizer.denormalize(&mut cache, row.killmail_id).await {
            Ok(view) => {
                if !view.needs_backfill {
                    resolved += 1;
                }
            }
            // The next scheduled run is the backoff for transient failures;
            // permanent ones need a code or data fix and log louder.
            Err(err) => match err.to_retry_strategy() {
                ErrorRetryStrategy::Retry => {
                    tracing::warn!(
                        killmail_id = row.killmail_id,
                        error = %err,
                        "backfill failed for killmail, will retry next run"
                    );
                }
                ErrorRetryStrategy::Fail => {
                    tracing::error!(
                        killmail_id = row.killmail_id,
                        error = %err,
                        "backfill failed permanently for killmail"
                    );
                }
            },
        }
    }

    Ok(resolved)
}
