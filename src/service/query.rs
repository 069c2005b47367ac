//! Read-only query facade.
//!
//! The single entry point the presentation layer talks to. Everything here is
//! a scan over the materialized views; storage failures surface as errors
//! rather than defaulting to empty results.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use entity::sea_orm_active_enums::EntityKind;

use crate::config::FilterConfig;
use crate::data::killmail::KillmailRepository;
use crate::data::view::{KillmailViewRepository, ParticipantRepository};
use crate::error::Error;
use crate::model::period::Period;
use crate::model::slot::SlotGroup;
use crate::model::stats::{EntityStat, ItemsBySlot, KillmailKind, LeaderboardEntry};
use crate::service::leaderboard::LeaderboardService;
use crate::service::stats::StatsService;

pub struct QueryService<'a> {
    db: &'a sea_orm::DatabaseConnection,
    filter: &'a FilterConfig,
}

impl<'a> QueryService<'a> {
    pub fn new(db: &'a sea_orm::DatabaseConnection, filter: &'a FilterConfig) -> Self {
        Self { db, filter }
    }

    /// Windowed kill/loss statistics for one entity.
    pub async fn entity_stats(
        &self,
        entity_kind: EntityKind,
        entity_id: i64,
        period: Period,
    ) -> Result<EntityStat, Error> {
        StatsService::new(self.db)
            .entity_stats(entity_kind, entity_id, period)
            .await
    }

    /// One page of an entity's killmails, newest first, restricted to the
    /// kill side, the loss side, or both.
    pub async fn entity_killmails(
        &self,
        entity_kind: EntityKind,
        entity_id: i64,
        kind: KillmailKind,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::killmail_view::Model>, Error> {
        let killmail_ids = ParticipantRepository::new(self.db)
            .entity_killmail_ids(entity_kind, entity_id, kind, page, per_page)
            .await?;

        if killmail_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::KillmailView::find()
            .filter(entity::killmail_view::Column::KillmailId.is_in(killmail_ids.iter().copied()))
            .all(self.db)
            .await?;

        // Restore the participant-index ordering lost by the IN fetch.
        let mut by_id: HashMap<i64, entity::killmail_view::Model> = rows
            .into_iter()
            .map(|row| (row.killmail_id, row))
            .collect();
        Ok(killmail_ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect())
    }

    /// Most valuable kills within the window.
    pub async fn most_valuable_kills(
        &self,
        period: Period,
        limit: u64,
        entity_filter: Option<(EntityKind, i64)>,
    ) -> Result<Vec<entity::killmail_view::Model>, Error> {
        LeaderboardService::new(self.db)
            .most_valuable(period, limit, entity_filter)
            .await
    }

    /// Entities of one kind ranked by kills within the window.
    pub async fn top_entities(
        &self,
        entity_kind: EntityKind,
        period: Period,
        limit: u64,
    ) -> Result<Vec<LeaderboardEntry>, Error> {
        LeaderboardService::new(self.db)
            .top_by_kills(entity_kind, period, limit)
            .await
    }

    /// Global feed page, newest first, narrowed to the followed entities
    /// when the filter is non-empty.
    pub async fn frontpage(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::killmail_view::Model>, Error> {
        let rows = KillmailViewRepository::new(self.db)
            .recent(self.filter, page, per_page)
            .await?;
        Ok(rows)
    }

    /// One denormalized killmail by external id.
    pub async fn killmail(
        &self,
        killmail_id: i64,
    ) -> Result<Option<entity::killmail_view::Model>, Error> {
        let row = KillmailViewRepository::new(self.db).get(killmail_id).await?;
        Ok(row)
    }

    /// A killmail's items grouped into fitting-slot buckets.
    pub async fn killmail_items(&self, killmail_id: i64) -> Result<ItemsBySlot, Error> {
        let items = KillmailRepository::new(self.db)
            .get_items(killmail_id)
            .await?;

        let mut buckets = ItemsBySlot::new();
        for item in items {
            buckets
                .entry(SlotGroup::from_flag(item.flag))
                .or_default()
                .push(item);
        }
        Ok(buckets)
    }
}
