use chrono::Utc;
use migration::{Alias, Expr, OnConflict};
use sea_orm::sea_query::ExprTrait;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::esi::universe::ItemType;

pub struct ItemTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts an item type record, keeping the highest version for the id.
    pub async fn upsert(
        &self,
        type_id: i64,
        item_type: ItemType,
        version: i64,
    ) -> Result<entity::eve_item_type::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::eve_item_type::ActiveModel {
            type_id: ActiveValue::Set(type_id),
            name: ActiveValue::Set(item_type.name),
            group_id: ActiveValue::Set(item_type.group_id),
            version: ActiveValue::Set(version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::EveItemType::insert(model)
            .on_conflict(
                OnConflict::column(entity::eve_item_type::Column::TypeId)
                    .update_columns([
                        entity::eve_item_type::Column::Name,
                        entity::eve_item_type::Column::GroupId,
                        entity::eve_item_type::Column::Version,
                        entity::eve_item_type::Column::UpdatedAt,
                    ])
                    .action_and_where(
                        Expr::col((Alias::new("excluded"), entity::eve_item_type::Column::Version))
                            .gt(Expr::col((
                                entity::eve_item_type::Entity,
                                entity::eve_item_type::Column::Version,
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

        self.get_by_type_id(type_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("eve_item_type {}", type_id)))
    }

    pub async fn get_by_type_id(
        &self,
        type_id: i64,
    ) -> Result<Option<entity::eve_item_type::Model>, DbErr> {
        entity::prelude::EveItemType::find()
            .filter(entity::eve_item_type::Column::TypeId.eq(type_id))
            .one(self.db)
            .await
    }
}
