use std::collections::HashMap;

use super::Resolution;

/// Per-batch memoization of directory lookups.
///
/// A cache lives for the duration of one ingest call or one backfill batch, so
/// a fleet fight referencing the same corporation two hundred times costs one
/// lookup. Unresolved outcomes are cached too, which keeps a dead upstream from
/// being hit once per reference.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    pub(super) characters: HashMap<i64, Resolution<entity::eve_character::Model>>,
    pub(super) corporations: HashMap<i64, Resolution<entity::eve_corporation::Model>>,
    pub(super) alliances: HashMap<i64, Resolution<entity::eve_alliance::Model>>,
    pub(super) item_types: HashMap<i64, Resolution<entity::eve_item_type::Model>>,
    pub(super) solar_systems: HashMap<i64, Resolution<entity::eve_solar_system::Model>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }
}
