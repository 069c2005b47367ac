use chrono::NaiveDateTime;
use migration::{Alias, Expr, OnConflict, Order};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Iterable, QueryFilter,
    QueryOrder, QuerySelect,
};

use entity::sea_orm_active_enums::EntityKind;

use crate::model::stats::KillmailKind;

/// Storage for the by-entity participant index.
pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes one killmail's participant rows; highest version per key wins.
    pub async fn put_many(
        &self,
        rows: Vec<entity::killmail_participant::Model>,
    ) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }

        let update_columns: Vec<entity::killmail_participant::Column> =
            entity::killmail_participant::Column::iter()
                .filter(|column| {
                    !matches!(
                        column,
                        entity::killmail_participant::Column::KillmailId
                            | entity::killmail_participant::Column::EntityKind
                            | entity::killmail_participant::Column::EntityId
                    )
                })
                .collect();

        let models = rows.into_iter().map(IntoActiveModel::into_active_model);

        let result = entity::prelude::KillmailParticipant::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::killmail_participant::Column::KillmailId,
                    entity::killmail_participant::Column::EntityKind,
                    entity::killmail_participant::Column::EntityId,
                ])
                .update_columns(update_columns)
                .action_and_where(
                    Expr::col((
                        Alias::new("excluded"),
                        entity::killmail_participant::Column::Version,
                    ))
                    .gt(Expr::col((
                        entity::killmail_participant::Entity,
                        entity::killmail_participant::Column::Version,
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

    /// All participations of one entity within the window, newest first.
    pub async fn scan_entity(
        &self,
        entity_kind: EntityKind,
        entity_id: i64,
        cutoff: Option<NaiveDateTime>,
    ) -> Result<Vec<entity::killmail_participant::Model>, DbErr> {
        let mut query = entity::prelude::KillmailParticipant::find()
            .filter(entity::killmail_participant::Column::EntityKind.eq(entity_kind))
            .filter(entity::killmail_participant::Column::EntityId.eq(entity_id));

        if let Some(cutoff) = cutoff {
            query = query.filter(entity::killmail_participant::Column::KillmailTime.gte(cutoff));
        }

        query
            .order_by_desc(entity::killmail_participant::Column::KillmailTime)
            .order_by_asc(entity::killmail_participant::Column::KillmailId)
            .all(self.db)
            .await
    }

    /// One page of an entity's killmail ids, optionally restricted to the
    /// kill or loss side, newest first.
    pub async fn entity_killmail_ids(
        &self,
        entity_kind: EntityKind,
        entity_id: i64,
        kind: KillmailKind,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<i64>, DbErr> {
        let mut query = entity::prelude::KillmailParticipant::find()
            .select_only()
            .column(entity::killmail_participant::Column::KillmailId)
            .filter(entity::killmail_participant::Column::EntityKind.eq(entity_kind))
            .filter(entity::killmail_participant::Column::EntityId.eq(entity_id));

        match kind {
            KillmailKind::Kills => {
                query = query.filter(entity::killmail_participant::Column::IsFinalBlow.eq(true));
            }
            KillmailKind::Losses => {
                query = query.filter(entity::killmail_participant::Column::IsVictim.eq(true));
            }
            KillmailKind::All => {}
        }

        query
            .order_by_desc(entity::killmail_participant::Column::KillmailTime)
            .order_by_asc(entity::killmail_participant::Column::KillmailId)
            .offset(page * per_page)
            .limit(per_page)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Attacker-side participation counts per entity within the window,
    /// ordered by count descending with entity id ascending as tie-break.
    ///
    /// Every attacker on a killmail gets credit, not just the final blow.
    pub async fn top_by_kills(
        &self,
        entity_kind: EntityKind,
        cutoff: Option<NaiveDateTime>,
        limit: u64,
    ) -> Result<Vec<(i64, i64)>, DbErr> {
        let mut query = entity::prelude::KillmailParticipant::find()
            .select_only()
            .column(entity::killmail_participant::Column::EntityId)
            .column_as(
                entity::killmail_participant::Column::KillmailId.count(),
                "kills",
            )
            .filter(entity::killmail_participant::Column::EntityKind.eq(entity_kind))
            .filter(entity::killmail_participant::Column::IsAttacker.eq(true));

        if let Some(cutoff) = cutoff {
            query = query.filter(entity::killmail_participant::Column::KillmailTime.gte(cutoff));
        }

        query
            .group_by(entity::killmail_participant::Column::EntityId)
            .order_by(Expr::col(Alias::new("kills")), Order::Desc)
            .order_by_asc(entity::killmail_participant::Column::EntityId)
            .limit(limit)
            .into_tuple::<(i64, i64)>()
            .all(self.db)
            .await
    }

    /// Drops participant rows older than the retention cutoff.
    pub async fn delete_before(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::KillmailParticipant::delete_many()
            .filter(entity::killmail_participant::Column::KillmailTime.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
