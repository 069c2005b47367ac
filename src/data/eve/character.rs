use chrono::Utc;
use migration::{Alias, Expr, OnConflict};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::esi::character::Character;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a character record, keeping the highest version for the id.
    ///
    /// A write with a version at or below the stored one is discarded; the
    /// row that is current after the call is returned either way.
    pub async fn upsert(
        &self,
        character_id: i64,
        character: Character,
        version: i64,
    ) -> Result<entity::eve_character::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(character.name),
            corporation_id: ActiveValue::Set(character.corporation_id),
            alliance_id: ActiveValue::Set(character.alliance_id),
            security_status: ActiveValue::Set(character.security_status),
            version: ActiveValue::Set(version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::EveCharacter::insert(model)
            .on_conflict(
                OnConflict::column(entity::eve_character::Column::CharacterId)
                    .update_columns([
                        entity::eve_character::Column::Name,
                        entity::eve_character::Column::CorporationId,
                        entity::eve_character::Column::AllianceId,
                        entity::eve_character::Column::SecurityStatus,
                        entity::eve_character::Column::Version,
                        entity::eve_character::Column::UpdatedAt,
                    ])
                    .action_and_where(
                        Expr::col((Alias::new("excluded"), entity::eve_character::Column::Version))
                            .gt(Expr::col((
                                entity::eve_character::Entity,
                                entity::eve_character::Column::Version,
                            ))),
                    )
                    .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => {}
            // Stale write discarded by the version guard
            Err(DbErr::RecordNotInserted) => {}
            Err(err) => return Err(err),
        }

        self.get_by_character_id(character_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("eve_character {}", character_id)))
    }

    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character::Model>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }
}
