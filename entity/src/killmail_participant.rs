use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::EntityKind;

/// By-entity index row: one row per (killmail, entity) participation.
/// Pre-keyed by participant so stat and leaderboard scans need no joins.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "killmail_participant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub killmail_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_kind: EntityKind,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_id: i64,
    pub version: i64,
    pub killmail_time: DateTime,
    pub total_value: f64,
    pub is_victim: bool,
    pub is_final_blow: bool,
    pub is_attacker: bool,
    pub is_solo: bool,
    pub is_npc: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
