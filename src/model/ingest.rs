//! Killmail payload accepted at the ingest boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Structured killmail payload: victim block, attacker list, item list,
/// external id, hash, timestamp, and system id.
#[derive(Debug, Clone, Deserialize)]
pub struct KillmailPayload {
    /// Stable external killmail id.
    pub killmail_id: i64,
    /// Killmail hash authenticating the external id.
    pub hash: String,
    /// When the kill happened.
    pub killmail_time: DateTime<Utc>,
    /// Solar system the kill happened in.
    pub solar_system_id: i64,
    /// The destroyed party.
    pub victim: VictimPayload,
    /// Everyone who shot; may be empty only in malformed payloads.
    pub attackers: Vec<AttackerPayload>,
}

/// Victim block of a killmail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct VictimPayload {
    /// Player character, absent for NPC victims.
    pub character_id: Option<i64>,
    /// Victim corporation, absent for some NPC victims.
    pub corporation_id: Option<i64>,
    /// Victim alliance, if any.
    pub alliance_id: Option<i64>,
    /// Ship type that was destroyed.
    pub ship_type_id: i64,
    /// Total damage taken.
    pub damage_taken: i64,
    /// Wreck position, if reported.
    pub position: Option<PositionPayload>,
    /// Fitted and carried items, possibly nested one level for containers.
    #[serde(default)]
    pub items: Vec<ItemPayload>,
}

/// Wreck position in system coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PositionPayload {
    /// X coordinate in meters.
    pub x: f64,
    /// Y coordinate in meters.
    pub y: f64,
    /// Z coordinate in meters.
    pub z: f64,
}

/// One attacker on a killmail.
#[derive(Debug, Clone, Deserialize)]
pub struct AttackerPayload {
    /// Player character, absent for NPC attackers.
    pub character_id: Option<i64>,
    /// Attacker corporation, if any.
    pub corporation_id: Option<i64>,
    /// Attacker alliance, if any.
    pub alliance_id: Option<i64>,
    /// Ship the attacker flew, if known.
    pub ship_type_id: Option<i64>,
    /// Weapon that dealt the damage, if known.
    pub weapon_type_id: Option<i64>,
    /// Damage dealt by this attacker.
    pub damage_done: i64,
    /// Whether this attacker landed the last hit.
    #[serde(default)]
    pub final_blow: bool,
    /// Attacker security status at kill time.
    pub security_status: Option<f64>,
}

/// One dropped/destroyed item, optionally carrying container contents.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    /// Item type.
    pub item_type_id: i64,
    /// Inventory flag (slot position).
    pub flag: i32,
    /// Quantity that dropped.
    #[serde(default)]
    pub quantity_dropped: i64,
    /// Quantity that was destroyed.
    #[serde(default)]
    pub quantity_destroyed: i64,
    /// Whether the item is assembled/named.
    #[serde(default)]
    pub singleton: bool,
    /// Contents, for container items.
    #[serde(default)]
    pub items: Vec<ItemPayload>,
}

/// Result of one ingest call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The killmail was new and has been stored and materialized.
    Accepted {
        /// External id of the accepted killmail.
        killmail_id: i64,
    },
    /// The killmail was already present; nothing changed.
    Duplicate,
    /// The payload was structurally invalid and was not stored.
    Rejected(String),
}
