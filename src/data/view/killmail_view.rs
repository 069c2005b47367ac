use chrono::NaiveDateTime;
use migration::{Alias, Condition, Expr, OnConflict};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Iterable, QueryFilter,
    QueryOrder, QuerySelect,
};

use entity::sea_orm_active_enums::EntityKind;

use crate::config::FilterConfig;
use crate::data::view::view_entity_condition;

/// Storage for denormalized killmail rows, keyed by external killmail id.
pub struct KillmailViewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KillmailViewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes a denormalized row; the highest version for the key wins.
    ///
    /// Concurrent re-denormalizations of the same killmail may race here;
    /// whichever carries the higher version lands, the other is a no-op.
    pub async fn put(&self, row: entity::killmail_view::Model) -> Result<(), DbErr> {
        let update_columns: Vec<entity::killmail_view::Column> =
            entity::killmail_view::Column::iter()
                .filter(|column| !matches!(column, entity::killmail_view::Column::KillmailId))
                .collect();

        let result = entity::prelude::KillmailView::insert(row.into_active_model())
            .on_conflict(
                OnConflict::column(entity::killmail_view::Column::KillmailId)
                    .update_columns(update_columns)
                    .action_and_where(
                        Expr::col((Alias::new("excluded"), entity::killmail_view::Column::Version))
                            .gt(Expr::col((
                                entity::killmail_view::Entity,
                                entity::killmail_view::Column::Version,
                            ))),
                    )
                    .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(err) => Err(err),
        }
    }

    pub async fn get(
        &self,
        killmail_id: i64,
    ) -> Result<Option<entity::killmail_view::Model>, DbErr> {
        entity::prelude::KillmailView::find_by_id(killmail_id)
            .one(self.db)
            .await
    }

    /// Global feed ordered by time, newest first, filtered to followed
    /// entities when the filter is non-empty.
    pub async fn recent(
        &self,
        filter: &FilterConfig,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::killmail_view::Model>, DbErr> {
        let mut query = entity::prelude::KillmailView::find();

        if !filter.is_empty() {
            query = query.filter(followed_condition(filter));
        }

        query
            .order_by_desc(entity::killmail_view::Column::KillmailTime)
            .order_by_asc(entity::killmail_view::Column::KillmailId)
            .offset(page * per_page)
            .limit(per_page)
            .all(self.db)
            .await
    }

    /// Rows ordered by `(total_value desc, killmail_time desc, killmail_id asc)`.
    ///
    /// The killmail id breaks every remaining tie, so the order is total and
    /// pagination over it is deterministic.
    pub async fn most_valuable(
        &self,
        cutoff: Option<NaiveDateTime>,
        limit: u64,
        entity_filter: Option<(EntityKind, i64)>,
    ) -> Result<Vec<entity::killmail_view::Model>, DbErr> {
        let mut query = entity::prelude::KillmailView::find();

        if let Some(cutoff) = cutoff {
            query = query.filter(entity::killmail_view::Column::KillmailTime.gte(cutoff));
        }

        if let Some((entity_kind, entity_id)) = entity_filter {
            query = query.filter(view_entity_condition(entity_kind, entity_id));
        }

        query
            .order_by_desc(entity::killmail_view::Column::TotalValue)
            .order_by_desc(entity::killmail_view::Column::KillmailTime)
            .order_by_asc(entity::killmail_view::Column::KillmailId)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Rows written with placeholders that a backfill pass should revisit.
    pub async fn needs_backfill(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::killmail_view::Model>, DbErr> {
        entity::prelude::KillmailView::find()
            .filter(entity::killmail_view::Column::NeedsBackfill.eq(true))
            .order_by_asc(entity::killmail_view::Column::KillmailTime)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Drops view rows older than the retention cutoff.
    pub async fn delete_before(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::KillmailView::delete_many()
            .filter(entity::killmail_view::Column::KillmailTime.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn followed_condition(filter: &FilterConfig) -> Condition {
    use entity::killmail_view::Column;

    let mut condition = Condition::any();

    if !filter.corporation_ids.is_empty() {
        condition = condition
            .add(Column::VictimCorporationId.is_in(filter.corporation_ids.iter().copied()))
            .add(Column::FinalBlowCorporationId.is_in(filter.corporation_ids.iter().copied()));
    }

    if !filter.alliance_ids.is_empty() {
        condition = condition
            .add(Column::VictimAllianceId.is_in(filter.alliance_ids.iter().copied()))
            .add(Column::FinalBlowAllianceId.is_in(filter.alliance_ids.iter().copied()));
    }

    condition
}
