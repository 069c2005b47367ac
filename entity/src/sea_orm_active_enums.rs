use sea_orm::entity::prelude::*;

/// Kind of entity a directory record or participant row refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EntityKind {
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "corporation")]
    Corporation,
    #[sea_orm(string_value = "alliance")]
    Alliance,
    #[sea_orm(string_value = "type")]
    Type,
    #[sea_orm(string_value = "system")]
    System,
    #[sea_orm(string_value = "region")]
    Region,
}

/// Risk/rule zone classification of the solar system a kill happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SpaceType {
    #[sea_orm(string_value = "highsec")]
    Highsec,
    #[sea_orm(string_value = "lowsec")]
    Lowsec,
    #[sea_orm(string_value = "nullsec")]
    Nullsec,
    #[sea_orm(string_value = "w-space")]
    WSpace,
    #[sea_orm(string_value = "abyssal")]
    Abyssal,
    #[sea_orm(string_value = "pochven")]
    Pochven,
}
