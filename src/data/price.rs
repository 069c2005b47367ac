use chrono::NaiveDate;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::esi::market::MarketHistoryDay;

/// Per-type, per-region, per-day price snapshot store.
pub struct PriceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PriceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts one type's market history days for a region.
    ///
    /// A day is identified by (type, region, date); re-importing the same day
    /// overwrites it with the fresher figures.
    pub async fn upsert_history(
        &self,
        type_id: i64,
        region_id: i64,
        days: Vec<MarketHistoryDay>,
    ) -> Result<u64, DbErr> {
        if days.is_empty() {
            return Ok(0);
        }

        let count = days.len() as u64;

        let snapshots = days
            .into_iter()
            .map(|day| entity::price_snapshot::ActiveModel {
                type_id: ActiveValue::Set(type_id),
                region_id: ActiveValue::Set(region_id),
                snapshot_date: ActiveValue::Set(day.date),
                average: ActiveValue::Set(day.average),
                highest: ActiveValue::Set(day.highest),
                lowest: ActiveValue::Set(day.lowest),
                order_count: ActiveValue::Set(day.order_count),
                volume: ActiveValue::Set(day.volume),
            });

        let result = entity::prelude::PriceSnapshot::insert_many(snapshots)
            .on_conflict(
                OnConflict::columns([
                    entity::price_snapshot::Column::TypeId,
                    entity::price_snapshot::Column::RegionId,
                    entity::price_snapshot::Column::SnapshotDate,
                ])
                .update_columns([
                    entity::price_snapshot::Column::Average,
                    entity::price_snapshot::Column::Highest,
                    entity::price_snapshot::Column::Lowest,
                    entity::price_snapshot::Column::OrderCount,
                    entity::price_snapshot::Column::Volume,
                ])
                .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(count),
            Err(DbErr::RecordNotInserted) => Ok(0),
            Err(err) => Err(err),
        }
    }

    /// Most recent snapshot at or before the given date, if any.
    pub async fn snapshot_at_or_before(
        &self,
        type_id: i64,
        region_id: i64,
        date: NaiveDate,
    ) -> Result<Option<entity::price_snapshot::Model>, DbErr> {
        entity::prelude::PriceSnapshot::find()
            .filter(entity::price_snapshot::Column::TypeId.eq(type_id))
            .filter(entity::price_snapshot::Column::RegionId.eq(region_id))
            .filter(entity::price_snapshot::Column::SnapshotDate.lte(date))
            .order_by_desc(entity::price_snapshot::Column::SnapshotDate)
            .one(self.db)
            .await
    }
}
