//! Killmail ingestion.
//!
//! Two phases per payload. Phase one resolves every referenced entity through
//! the directory under bounded timeouts, so the directory is warm before any
//! fact is written; a resolution failure degrades rather than blocking. Phase
//! two appends the killmail facts inside a transaction, then materializes the
//! view and participant rows. Duplicates short-circuit after the append and
//! leave no derived state changed.

use std::time::Duration;

use sea_orm::TransactionTrait;

use crate::data::killmail::{EventInsert, KillmailRepository};
use crate::error::{Error, IngestError};
use crate::esi;
use crate::model::ingest::{IngestOutcome, ItemPayload, KillmailPayload};
use crate::service::denormalize::DenormalizeService;
use crate::service::directory::{DirectoryService, ResolutionCache};

pub struct IngestService<'a> {
    db: &'a sea_orm::DatabaseConnection,
    esi_client: &'a esi::Client,
    resolve_timeout: Duration,
}

impl<'a> IngestService<'a> {
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

    /// Ingests one killmail payload.
    ///
    /// Structural validation failures are reported as
    /// [`IngestOutcome::Rejected`] rather than an error; only storage
    /// failures propagate.
    pub async fn ingest(&self, payload: &KillmailPayload) -> Result<IngestOutcome, Error> {
        if let Err(err) = validate(payload) {
            tracing::warn!(
                killmail_id = payload.killmail_id,
                error = %err,
                "killmail payload rejected"
            );
            return Ok(IngestOutcome::Rejected(err.to_string()));
        }

        let mut cache = ResolutionCache::new();
        self.warm_directory(payload, &mut cache).await?;

        let txn = self.db.begin().await?;
        let inserted = KillmailRepository::new(&txn).insert(payload).await?;
        txn.commit().await?;

        if inserted == EventInsert::Duplicate {
            tracing::debug!(killmail_id = payload.killmail_id, "duplicate killmail");
            return Ok(IngestOutcome::Duplicate);
        }

        DenormalizeService::new(self.db, self.esi_client, self.resolve_timeout)
            .denormalize(&mut cache, payload.killmail_id)
            .await?;

        tracing::info!(killmail_id = payload.killmail_id, "killmail ingested");
        Ok(IngestOutcome::Accepted {
            killmail_id: payload.killmail_id,
        })
    }

    /// Phase one: resolve every id the payload references so the follow-up
    /// denormalization hits the warm cache. Unresolvable ids are left for the
    /// backfill pass; only database failures propagate.
    async fn warm_directory(
        &self,
        payload: &KillmailPayload,
        cache: &mut ResolutionCache,
    ) -> Result<(), Error> {
        let directory = DirectoryService::new(self.db, self.esi_client, self.resolve_timeout);

        directory
            .resolve_solar_system(cache, payload.solar_system_id)
            .await?;
        directory
            .resolve_item_type(cache, payload.victim.ship_type_id)
            .await?;

        if let Some(id) = payload.victim.character_id {
            directory.resolve_character(cache, id).await?;
        }
        if let Some(id) = payload.victim.corporation_id {
            directory.resolve_corporation(cache, id).await?;
        }
        if let Some(id) = payload.victim.alliance_id {
            directory.resolve_alliance(cache, id).await?;
        }

        for attacker in &payload.attackers {
            if let Some(id) = attacker.character_id {
                directory.resolve_character(cache, id).await?;
            }
            if let Some(id) = attacker.corporation_id {
                directory.resolve_corporation(cache, id).await?;
            }
            if let Some(id) = attacker.alliance_id {
                directory.resolve_alliance(cache, id).await?;
            }
        }

        Ok(())
    }
}

/// Structural validation of a killmail payload.
fn validate(payload: &KillmailPayload) -> Result<(), IngestError> {
    if payload.killmail_id <= 0 {
        return Err(IngestError::MissingField("killmail_id"));
    }
    if payload.hash.trim().is_empty() {
        return Err(IngestError::MissingField("hash"));
    }
    if payload.solar_system_id <= 0 {
        return Err(IngestError::MissingField("solar_system_id"));
    }
    if payload.victim.ship_type_id <= 0 {
        return Err(IngestError::MissingField("victim.ship_type_id"));
    }
    if payload.attackers.is_empty() {
        return Err(IngestError::MissingField("attackers"));
    }

    let final_blows = payload
        .attackers
        .iter()
        .filter(|attacker| attacker.final_blow)
        .count();
    if final_blows > 1 {
        return Err(IngestError::MultipleFinalBlows(payload.killmail_id));
    }

    for item in &payload.victim.items {
        validate_item(payload.killmail_id, item)?;
    }

    Ok(())
}

// Every item row, containers included, must have been dropped or destroyed.
fn validate_item(killmail_id: i64, item: &ItemPayload) -> Result<(), IngestError> {
    if item.quantity_dropped == 0 && item.quantity_destroyed == 0 {
        return Err(IngestError::EmptyItem {
            killmail_id,
            type_id: item.item_type_id,
        });
    }
    for child in &item.items {
        validate_item(killmail_id, child)?;
    }
    Ok(())
}
