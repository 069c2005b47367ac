use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::SpaceType;

/// Denormalized, display-ready row per killmail. Derived data only; always
/// rebuildable from the killmail, directory, and price tables.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "killmail_view")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub killmail_id: i64,
    pub version: i64,
    pub killmail_time: DateTime,
    pub solar_system_id: i64,
    pub solar_system_name: String,
    pub region_id: i64,
    pub region_name: String,
    pub space_type: SpaceType,
    pub victim_character_id: Option<i64>,
    pub victim_character_name: Option<String>,
    pub victim_corporation_id: Option<i64>,
    pub victim_corporation_name: Option<String>,
    pub victim_corporation_ticker: Option<String>,
    pub victim_alliance_id: Option<i64>,
    pub victim_alliance_name: Option<String>,
    pub victim_alliance_ticker: Option<String>,
    pub victim_ship_type_id: i64,
    pub victim_ship_name: String,
    pub final_blow_character_id: Option<i64>,
    pub final_blow_character_name: Option<String>,
    pub final_blow_corporation_id: Option<i64>,
    pub final_blow_corporation_name: Option<String>,
    pub final_blow_alliance_id: Option<i64>,
    pub final_blow_alliance_name: Option<String>,
    pub final_blow_ship_type_id: Option<i64>,
    pub ship_value: f64,
    pub dropped_value: f64,
    pub destroyed_value: f64,
    pub total_value: f64,
    pub attacker_count: i32,
    pub is_solo: bool,
    pub is_npc: bool,
    pub needs_backfill: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
