//! Entity directory resolution.
//!
//! Killmail payloads reference everything by opaque numeric id. The directory
//! resolves those ids to named records, preferring the local cache tables and
//! falling back to ESI under a bounded timeout. Resolution never blocks
//! ingestion: a lookup that fails or times out degrades to
//! [`Resolution::Unresolved`] and the caller substitutes placeholders.

mod cache;

pub use cache::ResolutionCache;

use std::time::Duration;

use chrono::Utc;
use tokio::time::timeout;

use crate::data::eve::{
    AllianceRepository, CharacterRepository, CorporationRepository, ItemTypeRepository,
    SolarSystemRecord, SolarSystemRepository,
};
use crate::error::{Error, EsiError};
use crate::esi;

/// Name substituted when a referenced entity could not be resolved.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Ticker substituted when a referenced corporation or alliance could not be
/// resolved.
pub const UNKNOWN_TICKER: &str = "???";

/// Outcome of a directory lookup.
///
/// `Unresolved` means the upstream was unreachable or timed out; the id is
/// still valid and a later backfill pass will retry it.
#[derive(Debug, Clone)]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolution::Unresolved)
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }

    pub fn as_resolved(&self) -> Option<&T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }
}

/// Version assigned to directory writes sourced from a live lookup.
///
/// Wall-clock milliseconds, so a later resolution always supersedes an
/// earlier one and a backfilled record beats the placeholder era it replaces.
pub fn directory_version() -> i64 {
    Utc::now().timestamp_millis()
}

pub struct DirectoryService<'a> {
    db: &'a sea_orm::DatabaseConnection,
    esi_client: &'a esi::Client,
    resolve_timeout: Duration,
}

impl<'a> DirectoryService<'a> {
    pub fn new(
        db: &'a sea_orm::DatabaseConnection,
        esi_client: &'a esi::Client,
        resolve_timeout: Duration,
    ) -> Self {
        Self {
            db,
            esi_client,
            resolve_timeout,
        }
    }

    pub async fn resolve_character(
        &self,
        cache: &mut ResolutionCache,
        character_id: i64,
    ) -> Result<Resolution<entity::eve_character::Model>, Error> {
        if let Some(hit) = cache.characters.get(&character_id) {
            return Ok(hit.clone());
        }

        let repository = CharacterRepository::new(self.db);
        if let Some(model) = repository.get_by_character_id(character_id).await? {
            let resolution = Resolution::Resolved(model);
            cache.characters.insert(character_id, resolution.clone());
            return Ok(resolution);
        }

        let fetched = timeout(
            self.resolve_timeout,
            self.esi_client.character().get_character(character_id),
        )
        .await;

        let resolution = match fetched {
            Ok(Ok(character)) => {
                let model = repository
                    .upsert(character_id, character, directory_version())
                    .await?;
                Resolution::Resolved(model)
            }
            Ok(Err(err)) => {
                tracing::warn!(character_id, error = %err, "character resolution failed");
                Resolution::Unresolved
            }
            Err(_) => {
                tracing::warn!(character_id, "character resolution timed out");
                Resolution::Unresolved
            }
        };

        cache.characters.insert(character_id, resolution.clone());
        Ok(resolution)
    }

    pub async fn resolve_corporation(
        &self,
        cache: &mut ResolutionCache,
        corporation_id: i64,
    ) -> Result<Resolution<entity::eve_corporation::Model>, Error> {
        if let Some(hit) = cache.corporations.get(&corporation_id) {
            return Ok(hit.clone());
        }

        let repository = CorporationRepository::new(self.db);
        if let Some(model) = repository.get_by_corporation_id(corporation_id).await? {
            let resolution = Resolution::Resolved(model);
            cache.corporations.insert(corporation_id, resolution.clone());
            return Ok(resolution);
        }

        let fetched = timeout(
            self.resolve_timeout,
            self.esi_client.corporation().get_corporation(corporation_id),
        )
        .await;

        let resolution = match fetched {
            Ok(Ok(corporation)) => {
                let model = repository
                    .upsert(corporation_id, corporation, directory_version())
                    .await?;
                Resolution::Resolved(model)
            }
            Ok(Err(err)) => {
                tracing::warn!(corporation_id, error = %err, "corporation resolution failed");
                Resolution::Unresolved
            }
            Err(_) => {
                tracing::warn!(corporation_id, "corporation resolution timed out");
                Resolution::Unresolved
            }
        };

        cache.corporations.insert(corporation_id, resolution.clone());
        Ok(resolution)
    }

    pub async fn resolve_alliance(
        &self,
        cache: &mut ResolutionCache,
        alliance_id: i64,
    ) -> Result<Resolution<entity::eve_alliance::Model>, Error> {
        if let Some(hit) = cache.alliances.get(&alliance_id) {
            return Ok(hit.clone());
        }

        let repository = AllianceRepository::new(self.db);
        if let Some(model) = repository.get_by_alliance_id(alliance_id).await? {
            let resolution = Resolution::Resolved(model);
            cache.alliances.insert(alliance_id, resolution.clone());
            return Ok(resolution);
        }

        let fetched = timeout(
            self.resolve_timeout,
            self.esi_client.alliance().get_alliance(alliance_id),
        )
        .await;

        let resolution = match fetched {
            Ok(Ok(alliance)) => {
                let model = repository
                    .upsert(alliance_id, alliance, directory_version())
                    .await?;
                Resolution::Resolved(model)
            }
            Ok(Err(err)) => {
                tracing::warn!(alliance_id, error = %err, "alliance resolution failed");
                Resolution::Unresolved
            }
            Err(_) => {
                tracing::warn!(alliance_id, "alliance resolution timed out");
                Resolution::Unresolved
            }
        };

        cache.alliances.insert(alliance_id, resolution.clone());
        Ok(resolution)
    }

    pub async fn resolve_item_type(
        &self,
        cache: &mut ResolutionCache,
        type_id: i64,
    ) -> Result<Resolution<entity::eve_item_type::Model>, Error> {
        if let Some(hit) = cache.item_types.get(&type_id) {
            return Ok(hit.clone());
        }

        let repository = ItemTypeRepository::new(self.db);
        if let Some(model) = repository.get_by_type_id(type_id).await? {
            let resolution = Resolution::Resolved(model);
            cache.item_types.insert(type_id, resolution.clone());
            return Ok(resolution);
        }

        let fetched = timeout(
            self.resolve_timeout,
            self.esi_client.universe().get_type(type_id),
        )
        .await;

        let resolution = match fetched {
            Ok(Ok(item_type)) => {
                let model = repository
                    .upsert(type_id, item_type, directory_version())
                    .await?;
                Resolution::Resolved(model)
            }
            Ok(Err(err)) => {
                tracing::warn!(type_id, error = %err, "item type resolution failed");
                Resolution::Unresolved
            }
            Err(_) => {
                tracing::warn!(type_id, "item type resolution timed out");
                Resolution::Unresolved
            }
        };

        cache.item_types.insert(type_id, resolution.clone());
        Ok(resolution)
    }

    /// Resolves a solar system, composing the system, constellation, and
    /// region endpoints into one record. The whole chain shares a single
    /// timeout.
    pub async fn resolve_solar_system(
        &self,
        cache: &mut ResolutionCache,
        system_id: i64,
    ) -> Result<Resolution<entity::eve_solar_system::Model>, Error> {
        if let Some(hit) = cache.solar_systems.get(&system_id) {
            return Ok(hit.clone());
        }

        let repository = SolarSystemRepository::new(self.db);
        if let Some(model) = repository.get_by_system_id(system_id).await? {
            let resolution = Resolution::Resolved(model);
            cache.solar_systems.insert(system_id, resolution.clone());
            return Ok(resolution);
        }

        let universe = self.esi_client.universe();
        let fetched = timeout(self.resolve_timeout, async {
            let system = universe.get_system(system_id).await?;
            let constellation = universe.get_constellation(system.constellation_id).await?;
            let region = universe.get_region(constellation.region_id).await?;
            Ok::<_, EsiError>(SolarSystemRecord {
                name: system.name,
                region_id: constellation.region_id,
                region_name: region.name,
                security_status: system.security_status,
            })
        })
        .await;

        let resolution = match fetched {
            Ok(Ok(record)) => {
                let model = repository
                    .upsert(system_id, record, directory_version())
                    .await?;
                Resolution::Resolved(model)
            }
            Ok(Err(err)) => {
                tracing::warn!(system_id, error = %err, "solar system resolution failed");
                Resolution::Unresolved
            }
            Err(_) => {
                tracing::warn!(system_id, "solar system resolution timed out");
                Resolution::Unresolved
            }
        };

        cache.solar_systems.insert(system_id, resolution.clone());
        Ok(resolution)
    }
}
