//! Inventory flag to fitting-slot bucket mapping.

use serde::Serialize;

/// Fitting-slot bucket a dropped/destroyed item is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotGroup {
    /// High power slots (flags 27-34).
    High,
    /// Medium power slots (flags 19-26).
    Mid,
    /// Low power slots (flags 11-18).
    Low,
    /// Rig slots (flags 92-94).
    Rig,
    /// Subsystem slots (flags 125-132).
    Subsystem,
    /// Drone bay (flag 87).
    DroneBay,
    /// Cargo hold (flag 5).
    Cargo,
    /// Catch-all for flags with no dedicated bucket.
    Other,
}

impl SlotGroup {
    /// Maps an inventory flag to its display bucket; unmapped flags land in
    /// the catch-all bucket.
    pub fn from_flag(flag: i32) -> Self {
        match flag {
            27..=34 => SlotGroup::High,
            19..=26 => SlotGroup::Mid,
            11..=18 => SlotGroup::Low,
            92..=94 => SlotGroup::Rig,
            125..=132 => SlotGroup::Subsystem,
            87 => SlotGroup::DroneBay,
            5 => SlotGroup::Cargo,
            _ => SlotGroup::Other,
        }
    }
}
