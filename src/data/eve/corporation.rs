use chrono::Utc;
use migration::{Alias, Expr, OnConflict};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::esi::corporation::Corporation;

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a corporation record, keeping the highest version for the id.
    pub async fn upsert(
        &self,
        corporation_id: i64,
        corporation: Corporation,
        version: i64,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(corporation.name),
            ticker: ActiveValue::Set(corporation.ticker),
            alliance_id: ActiveValue::Set(corporation.alliance_id),
            member_count: ActiveValue::Set(corporation.member_count),
            version: ActiveValue::Set(version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::EveCorporation::insert(model)
            .on_conflict(
                OnConflict::column(entity::eve_corporation::Column::CorporationId)
                    .update_columns([
                        entity::eve_corporation::Column::Name,
                        entity::eve_corporation::Column::Ticker,
                        entity::eve_corporation::Column::AllianceId,
                        entity::eve_corporation::Column::MemberCount,
                        entity::eve_corporation::Column::Version,
                        entity::eve_corporation::Column::UpdatedAt,
                    ])
                    .action_and_where(
                        Expr::col((
                            Alias::new("excluded"),
                            entity::eve_corporation::Column::Version,
                        ))
                        .gt(Expr::col((
                            entity::eve_corporation::Entity,
                            entity::eve_corporation::Column::Version,
                        ))),
                    )
                    .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => {}
            Err(DbErr::RecordNotInserted) => {}
            Err(err) => return Err(err),
        }

        self.get_by_corporation_id(corporation_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("eve_corporation {}", corporation_id)))
    }

    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }
}
