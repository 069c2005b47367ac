use chrono::Utc;
use migration::{Alias, Expr, OnConflict};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::esi::alliance::Alliance;

pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts an alliance record, keeping the highest version for the id.
    pub async fn upsert(
        &self,
        alliance_id: i64,
        alliance: Alliance,
        version: i64,
    ) -> Result<entity::eve_alliance::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::eve_alliance::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set(alliance.name),
            ticker: ActiveValue::Set(alliance.ticker),
            version: ActiveValue::Set(version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::EveAlliance::insert(model)
            .on_conflict(
                OnConflict::column(entity::eve_alliance::Column::AllianceId)
                    .update_columns([
                        entity::eve_alliance::Column::Name,
                        entity::eve_alliance::Column::Ticker,
                        entity::eve_alliance::Column::Version,
                        entity::eve_alliance::Column::UpdatedAt,
                    ])
                    .action_and_where(
                        Expr::col((Alias::new("excluded"), entity::eve_alliance::Column::Version))
                            .gt(Expr::col((
                                entity::eve_alliance::Entity,
                                entity::eve_alliance::Column::Version,
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

        self.get_by_alliance_id(alliance_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("eve_alliance {}", alliance_id)))
    }

    pub async fn get_by_alliance_id(
        &self,
        alliance_id: i64,
    ) -> Result<Option<entity::eve_alliance::Model>, DbErr> {
        entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(self.db)
            .await
    }
}
