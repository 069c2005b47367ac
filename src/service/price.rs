//! Price oracle.
//!
//! Killmail values are computed from daily regional market history snapshots
//! in the reference region. Lookups prefer stored snapshots at or before the
//! kill date; a miss triggers a bounded history fetch, and a type with no
//! obtainable history values at zero rather than failing the caller.

use std::time::Duration;

use chrono::NaiveDate;
use tokio::time::timeout;

use crate::config::REFERENCE_REGION_ID;
use crate::data::price::PriceRepository;
use crate::error::{Error, EsiError};
use crate::esi;

pub struct PriceService<'a> {
    db: &'a sea_orm::DatabaseConnection,
    esi_client: &'a esi::Client,
    resolve_timeout: Duration,
}

impl<'a> PriceService<'a> {
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

    /// Average daily price of a type on the given date, using the nearest
    /// snapshot at or before it. Returns 0.0 when no history exists.
    pub async fn value_at(&self, type_id: i64, date: NaiveDate) -> Result<f64, Error> {
        let repository = PriceRepository::new(self.db);

        if let Some(snapshot) = repository
            .snapshot_at_or_before(type_id, REFERENCE_REGION_ID, date)
            .await?
        {
            return Ok(snapshot.average);
        }

        match self.fetch_history(type_id).await {
            Ok(stored) if stored > 0 => {
                let snapshot = repository
                    .snapshot_at_or_before(type_id, REFERENCE_REGION_ID, date)
                    .await?;
                Ok(snapshot.map(|row| row.average).unwrap_or(0.0))
            }
            Ok(_) => Ok(0.0),
            Err(err) => {
                tracing::warn!(type_id, error = %err, "price history fetch failed");
                Ok(0.0)
            }
        }
    }

    /// Refreshes the stored history for a type from the market endpoint.
    /// Returns the number of snapshot rows written.
    pub async fn refresh_type(&self, type_id: i64) -> Result<u64, Error> {
        let stored = self.fetch_history(type_id).await?;
        Ok(stored)
    }

    async fn fetch_history(&self, type_id: i64) -> Result<u64, Error> {
        let fetched = timeout(
            self.resolve_timeout,
            self.esi_client
                .market()
                .get_history(REFERENCE_REGION_ID, type_id),
        )
        .await
        .map_err(|_| EsiError::Timeout(self.resolve_timeout))??;

        let stored = PriceRepository::new(self.db)
            .upsert_history(type_id, REFERENCE_REGION_ID, fetched)
            .await?;
        Ok(stored)
    }
}
