use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::ingest::{ItemPayload, KillmailPayload};

/// Result of appending one killmail to the event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventInsert {
    /// The killmail was new and its facts were appended.
    Inserted,
    /// The external id was already present; no state changed.
    Duplicate,
}

/// Append-only store of killmail, attacker, and item facts.
pub struct KillmailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KillmailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a killmail with its attackers and items.
    ///
    /// Idempotent on the external id: re-ingesting an already stored killmail
    /// is a no-op reported as [`EventInsert::Duplicate`]. Run inside a
    /// transaction so a duplicate leaves no partial attacker/item rows.
    pub async fn insert(&self, payload: &KillmailPayload) -> Result<EventInsert, DbErr> {
        let killmail = entity::killmail::ActiveModel {
            killmail_id: ActiveValue::Set(payload.killmail_id),
            hash: ActiveValue::Set(payload.hash.clone()),
            killmail_time: ActiveValue::Set(payload.killmail_time.naive_utc()),
            solar_system_id: ActiveValue::Set(payload.solar_system_id),
            victim_character_id: ActiveValue::Set(payload.victim.character_id),
            victim_corporation_id: ActiveValue::Set(payload.victim.corporation_id),
            victim_alliance_id: ActiveValue::Set(payload.victim.alliance_id),
            victim_ship_type_id: ActiveValue::Set(payload.victim.ship_type_id),
            damage_taken: ActiveValue::Set(payload.victim.damage_taken),
            position_x: ActiveValue::Set(payload.victim.position.map(|p| p.x)),
            position_y: ActiveValue::Set(payload.victim.position.map(|p| p.y)),
            position_z: ActiveValue::Set(payload.victim.position.map(|p| p.z)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = entity::prelude::Killmail::insert(killmail)
            .on_conflict(
                OnConflict::column(entity::killmail::Column::KillmailId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => {}
            Err(DbErr::RecordNotInserted) => return Ok(EventInsert::Duplicate),
            Err(err) => return Err(err),
        }

        if !payload.attackers.is_empty() {
            let attackers = payload.attackers.iter().map(|attacker| {
                entity::killmail_attacker::ActiveModel {
                    killmail_id: ActiveValue::Set(payload.killmail_id),
                    character_id: ActiveValue::Set(attacker.character_id),
                    corporation_id: ActiveValue::Set(attacker.corporation_id),
                    alliance_id: ActiveValue::Set(attacker.alliance_id),
                    ship_type_id: ActiveValue::Set(attacker.ship_type_id),
                    weapon_type_id: ActiveValue::Set(attacker.weapon_type_id),
                    damage_done: ActiveValue::Set(attacker.damage_done),
                    final_blow: ActiveValue::Set(attacker.final_blow),
                    security_status: ActiveValue::Set(attacker.security_status),
                    ..Default::default()
                }
            });

            entity::prelude::KillmailAttacker::insert_many(attackers)
                .exec(self.db)
                .await?;
        }

        for item in &payload.victim.items {
            self.insert_item(payload.killmail_id, item, None).await?;
        }

        Ok(EventInsert::Inserted)
    }

    /// Inserts an item row and, for containers, its contents.
    async fn insert_item(
        &self,
        killmail_id: i64,
        item: &ItemPayload,
        parent_item_id: Option<i32>,
    ) -> Result<(), DbErr> {
        let model = entity::killmail_item::ActiveModel {
            killmail_id: ActiveValue::Set(killmail_id),
            parent_item_id: ActiveValue::Set(parent_item_id),
            item_type_id: ActiveValue::Set(item.item_type_id),
            flag: ActiveValue::Set(item.flag),
            quantity_dropped: ActiveValue::Set(item.quantity_dropped),
            quantity_destroyed: ActiveValue::Set(item.quantity_destroyed),
            singleton: ActiveValue::Set(item.singleton),
            ..Default::default()
        };

        let inserted = model.insert(self.db).await?;

        for child in &item.items {
            Box::pin(self.insert_item(killmail_id, child, Some(inserted.id))).await?;
        }

        Ok(())
    }

    pub async fn get_by_killmail_id(
        &self,
        killmail_id: i64,
    ) -> Result<Option<entity::killmail::Model>, DbErr> {
        entity::prelude::Killmail::find()
            .filter(entity::killmail::Column::KillmailId.eq(killmail_id))
            .one(self.db)
            .await
    }

    pub async fn get_attackers(
        &self,
        killmail_id: i64,
    ) -> Result<Vec<entity::killmail_attacker::Model>, DbErr> {
        entity::prelude::KillmailAttacker::find()
            .filter(entity::killmail_attacker::Column::KillmailId.eq(killmail_id))
            .all(self.db)
            .await
    }

    pub async fn get_items(
        &self,
        killmail_id: i64,
    ) -> Result<Vec<entity::killmail_item::Model>, DbErr> {
        entity::prelude::KillmailItem::find()
            .filter(entity::killmail_item::Column::KillmailId.eq(killmail_id))
            .all(self.db)
            .await
    }

    /// Deletes killmails older than the cutoff together with their attacker
    /// and item rows. Retention pruning is the only deletion path for event
    /// facts; derived view rows are pruned separately by the same job.
    pub async fn prune_older_than(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        const BATCH_SIZE: usize = 500;

        let expired: Vec<i64> = {
            use sea_orm::QuerySelect;

            entity::prelude::Killmail::find()
                .select_only()
                .column(entity::killmail::Column::KillmailId)
                .filter(entity::killmail::Column::KillmailTime.lt(cutoff))
                .into_tuple::<i64>()
                .all(self.db)
                .await?
        };

        let mut pruned = 0;

        for batch in expired.chunks(BATCH_SIZE) {
            entity::prelude::KillmailAttacker::delete_many()
                .filter(entity::killmail_attacker::Column::KillmailId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?;

            entity::prelude::KillmailItem::delete_many()
                .filter(entity::killmail_item::Column::KillmailId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?;

            let result = entity::prelude::Killmail::delete_many()
                .filter(entity::killmail::Column::KillmailId.is_in(batch.iter().copied()))
                .exec(self.db)
                .await?;

            pruned += result.rows_affected;
        }

        Ok(pruned)
    }
}
