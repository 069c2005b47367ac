use serde::Deserialize;

use crate::error::esi::EsiError;

/// Inventory type information.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemType {
    /// Display name.
    pub name: String,
    /// Group the type belongs to.
    #[serde(default)]
    pub group_id: Option<i64>,
}

/// Solar system information.
#[derive(Debug, Clone, Deserialize)]
pub struct SolarSystem {
    /// Display name.
    pub name: String,
    /// Constellation the system belongs to; the region is resolved through it.
    pub constellation_id: i64,
    /// True security status.
    pub security_status: f64,
}

/// Constellation information.
#[derive(Debug, Clone, Deserialize)]
pub struct Constellation {
    /// Region the constellation belongs to.
    pub region_id: i64,
}

/// Region information.
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    /// Display name.
    pub name: String,
}

/// Universe endpoints.
pub struct UniverseApi<'a> {
    pub(crate) client: &'a super::Client,
}

impl UniverseApi<'_> {
    /// Fetches one inventory type.
    pub async fn get_type(&self, type_id: i64) -> Result<ItemType, EsiError> {
        self.client
            .get_json(&format!("/universe/types/{}/", type_id))
            .await
    }

    /// Fetches one solar system.
    pub async fn get_system(&self, system_id: i64) -> Result<SolarSystem, EsiError> {
        self.client
            .get_json(&format!("/universe/systems/{}/", system_id))
            .await
    }

    /// Fetches one constellation.
    pub async fn get_constellation(&self, constellation_id: i64) -> Result<Constellation, EsiError> {
        self.client
            .get_json(&format!("/universe/constellations/{}/", constellation_id))
            .await
    }

    /// Fetches one region.
    pub async fn get_region(&self, region_id: i64) -> Result<Region, EsiError> {
        self.client
            .get_json(&format!("/universe/regions/{}/", region_id))
            .await
    }
}
