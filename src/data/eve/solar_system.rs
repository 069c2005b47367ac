use chrono::Utc;
use migration::{Alias, Expr, OnConflict};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Fully resolved solar system record, composed from the system,
/// constellation, and region endpoints before it reaches storage.
#[derive(Debug, Clone)]
pub struct SolarSystemRecord {
    pub name: String,
    pub region_id: i64,
    pub region_name: String,
    pub security_status: f64,
}

pub struct SolarSystemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SolarSystemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a solar system record, keeping the highest version for the id.
    pub async fn upsert(
        &self,
        system_id: i64,
        system: SolarSystemRecord,
        version: i64,
    ) -> Result<entity::eve_solar_system::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::eve_solar_system::ActiveModel {
            system_id: ActiveValue::Set(system_id),
            name: ActiveValue::Set(system.name),
            region_id: ActiveValue::Set(system.region_id),
            region_name: ActiveValue::Set(system.region_name),
            security_status: ActiveValue::Set(system.security_status),
            version: ActiveValue::Set(version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::EveSolarSystem::insert(model)
            .on_conflict(
                OnConflict::column(entity::eve_solar_system::Column::SystemId)
                    .update_columns([
                        entity::eve_solar_system::Column::Name,
                        entity::eve_solar_system::Column::RegionId,
                        entity::eve_solar_system::Column::RegionName,
                        entity::eve_solar_system::Column::SecurityStatus,
                        entity::eve_solar_system::Column::Version,
                        entity::eve_solar_system::Column::UpdatedAt,
                    ])
                    .action_and_where(
                        Expr::col((
                            Alias::new("excluded"),
                            entity::eve_solar_system::Column::Version,
                        ))
                        .gt(Expr::col((
                            entity::eve_solar_system::Entity,
                            entity::eve_solar_system::Column::Version,
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

        self.get_by_system_id(system_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("eve_solar_system {}", system_id)))
    }

    pub async fn get_by_system_id(
        &self,
        system_id: i64,
    ) -> Result<Option<entity::eve_solar_system::Model>, DbErr> {
        entity::prelude::EveSolarSystem::find()
            .filter(entity::eve_solar_system::Column::SystemId.eq(system_id))
            .one(self.db)
            .await
    }
}
