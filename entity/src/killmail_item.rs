use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "killmail_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub killmail_id: i64,
    /// Row id of the container this item was nested inside, if any.
    pub parent_item_id: Option<i32>,
    pub item_type_id: i64,
    pub flag: i32,
    pub quantity_dropped: i64,
    pub quantity_destroyed: i64,
    pub singleton: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
