//! Aggregated statistic records served by the query facade.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EntityKind;
use serde::{Deserialize, Serialize};

use crate::model::{period::Period, slot::SlotGroup};

/// Windowed kill/loss statistics for one entity.
///
/// Computed by scanning the by-entity participant view and summing; never
/// stored, never incremented in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStat {
    /// Kind of the entity the stats are for.
    pub entity_kind: EntityKind,
    /// External id of the entity.
    pub entity_id: i64,
    /// Window the stats cover.
    pub period: Period,
    /// Killmails where the entity landed the final blow.
    pub kills: u64,
    /// Killmails where the entity was the victim.
    pub losses: u64,
    /// ISK destroyed on kills.
    pub isk_destroyed: f64,
    /// ISK lost on losses.
    pub isk_lost: f64,
    /// Kills with exactly one identified attacker.
    pub solo_kills: u64,
    /// Losses where every attacker was an NPC.
    pub npc_losses: u64,
    /// Time of the most recent kill in the window.
    pub last_kill_at: Option<NaiveDateTime>,
    /// Time of the most recent loss in the window.
    pub last_loss_at: Option<NaiveDateTime>,
    /// `100 * isk_destroyed / (isk_destroyed + isk_lost)`, 0 when no ISK moved.
    pub efficiency: f64,
    /// `kills / losses` when losses > 0, otherwise the kill count itself, so
    /// an entity with kills and no losses ranks by its kills rather than
    /// flattening to zero.
    pub kill_loss_ratio: f64,
}

/// Which side of a killmail an entity-killmail listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KillmailKind {
    /// Final-blow participations only.
    Kills,
    /// Victim participations only.
    Losses,
    /// Both sides.
    All,
}

/// One entry of a top-entities leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// External id of the ranked entity.
    pub entity_id: i64,
    /// Distinct killmails the entity participated in as an attacker.
    pub kills: u64,
}

/// A killmail's items grouped into fitting-slot buckets for display.
pub type ItemsBySlot = BTreeMap<SlotGroup, Vec<entity::killmail_item::Model>>;
