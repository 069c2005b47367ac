//! Windowed entity statistics.
//!
//! Statistics are never maintained as counters. Every call scans the
//! by-entity participant view for the window and sums, so concurrent
//! denormalization needs no coordination with readers.

use chrono::Utc;

use entity::sea_orm_active_enums::EntityKind;

use crate::data::view::ParticipantRepository;
use crate::error::Error;
use crate::model::period::Period;
use crate::model::stats::EntityStat;

pub struct StatsService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }

    /// Kill/loss statistics for one entity over the given window.
    ///
    /// Kills are final-blow participations, losses are victim participations;
    /// a self-referential row counts on both sides.
    pub async fn entity_stats(
        &self,
        entity_kind: EntityKind,
        entity_id: i64,
        period: Period,
    ) -> Result<EntityStat, Error> {
        let rows = ParticipantRepository::new(self.db)
            .scan_entity(entity_kind, entity_id, period.cutoff(Utc::now()))
            .await?;

        let mut stat = EntityStat {
            entity_kind,
            entity_id,
            period,
            kills: 0,
            losses: 0,
            isk_destroyed: 0.0,
            isk_lost: 0.0,
            solo_kills: 0,
            npc_losses: 0,
            last_kill_at: None,
            last_loss_at: None,
            efficiency: 0.0,
            kill_loss_ratio: 0.0,
        };

        for row in rows {
            if row.is_final_blow {
                stat.kills += 1;
                stat.isk_destroyed += row.total_value;
                if row.is_solo {
                    stat.solo_kills += 1;
                }
                stat.last_kill_at = stat.last_kill_at.max(Some(row.killmail_time));
            }
            if row.is_victim {
                stat.losses += 1;
                stat.isk_lost += row.total_value;
                if row.is_npc {
                    stat.npc_losses += 1;
                }
                stat.last_loss_at = stat.last_loss_at.max(Some(row.killmail_time));
            }
        }

        let isk_total = stat.isk_destroyed + stat.isk_lost;
        if isk_total > 0.0 {
            stat.efficiency = 100.0 * stat.isk_destroyed / isk_total;
        }
        stat.kill_loss_ratio = if stat.losses > 0 {
            stat.kills as f64 / stat.losses as f64
        } else {
            stat.kills as f64
        };

        Ok(stat)
    }
}
