use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "killmail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub killmail_id: i64,
    pub hash: String,
    pub killmail_time: DateTime,
    pub solar_system_id: i64,
    pub victim_character_id: Option<i64>,
    pub victim_corporation_id: Option<i64>,
    pub victim_alliance_id: Option<i64>,
    pub victim_ship_type_id: i64,
    pub damage_taken: i64,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub position_z: Option<f64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
