//! Market history refresh pass.

use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use entity::sea_orm_active_enums::EntityKind;

use crate::error::{retry::ErrorRetryStrategy, Error};
use crate::scheduler::{config, JobContext};
use crate::service::price::PriceService;

/// Refreshes stored market history for types seen on recent killmails, so
/// valuation of incoming kills holds a warm snapshot instead of fetching
/// inline. A type whose fetch fails is skipped and retried next run.
pub async fn run(context: JobContext) -> Result<u64, Error> {
    let since =
        (Utc::now() - Duration::hours(config::price_refresh::LOOKBACK_HOURS)).naive_utc();

    let type_ids: Vec<i64> = entity::prelude::KillmailParticipant::find()
        .select_only()
        .column(entity::killmail_participant::Column::EntityId)
        .distinct()
        .filter(entity::killmail_participant::Column::EntityKind.eq(EntityKind::Type))
        .filter(entity::killmail_participant::Column::KillmailTime.gte(since))
        .limit(config::price_refresh::TYPE_LIMIT)
        .into_tuple()
        .all(&context.db)
        .await?;

    let price = PriceService::new(&context.db, &context.esi_client, context.resolve_timeout);
    let mut refreshed = 0;

    for type_id in type_ids {
        match price.refresh_type(type_id).await {
            Ok(_) => refreshed += 1,
            Err(err) => match err.to_retry_strategy() {
                ErrorRetryStrategy::Retry => {
                    tracing::warn!(type_id, error = %err, "price refresh failed, will retry next run");
                }
                ErrorRetryStrategy::Fail => {
                    tracing::error!(type_id, error = %err, "price refresh failed permanently");
                }
            },
        }
    }

    Ok(refreshed)
}
