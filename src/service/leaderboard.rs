//! Leaderboards.
//!
//! Rankings are aggregation passes over the materialized views at query time.
//! Top-entities credits every attacker on a killmail, not just the final
//! blow, and tie-breaks on ascending entity id so repeated calls with
//! unchanged data return the same order.

use chrono::Utc;

use entity::sea_orm_active_enums::EntityKind;

use crate::data::view::{KillmailViewRepository, ParticipantRepository};
use crate::error::Error;
use crate::model::period::Period;
use crate::model::stats::LeaderboardEntry;

pub struct LeaderboardService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }

    /// Entities of one kind ranked by attacker-side participations within
    /// the window.
    pub async fn top_by_kills(
        &self,
        entity_kind: EntityKind,
        period: Period,
        limit: u64,
    ) -> Result<Vec<LeaderboardEntry>, Error> {
        let ranked = ParticipantRepository::new(self.db)
            .top_by_kills(entity_kind, period.cutoff(Utc::now()), limit)
            .await?;

        Ok(ranked
            .into_iter()
            .map(|(entity_id, kills)| LeaderboardEntry {
                entity_id,
                kills: kills as u64,
            })
            .collect())
    }

    /// Most valuable kills within the window, optionally restricted to one
    /// entity's kills and losses.
    pub async fn most_valuable(
        &self,
        period: Period,
        limit: u64,
        entity_filter: Option<(EntityKind, i64)>,
    ) -> Result<Vec<entity::killmail_view::Model>, Error> {
        let rows = KillmailViewRepository::new(self.db)
            .most_valuable(period.cutoff(Utc::now()), limit, entity_filter)
            .await?;
        Ok(rows)
    }
}
