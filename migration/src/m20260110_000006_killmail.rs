use sea_orm_migration::{prelude::*, schema::*};

static IDX_KILLMAIL_TIME: &str = "idx-killmail-killmail_time";
static IDX_KILLMAIL_SYSTEM_ID: &str = "idx-killmail-solar_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Killmail::Table)
                    .if_not_exists()
                    .col(pk_auto(Killmail::Id))
                    .col(big_integer_uniq(Killmail::KillmailId))
                    .col(string(Killmail::Hash))
                    .col(timestamp(Killmail::KillmailTime))
                    .col(big_integer(Killmail::SolarSystemId))
                    .col(big_integer_null(Killmail::VictimCharacterId))
                    .col(big_integer_null(Killmail::VictimCorporationId))
                    .col(big_integer_null(Killmail::VictimAllianceId))
                    .col(big_integer(Killmail::VictimShipTypeId))
                    .col(big_integer(Killmail::DamageTaken))
                    .col(double_null(Killmail::PositionX))
                    .col(double_null(Killmail::PositionY))
                    .col(double_null(Killmail::PositionZ))
                    .col(timestamp(Killmail::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_TIME)
                    .table(Killmail::Table)
                    .col(Killmail::KillmailTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_SYSTEM_ID)
                    .table(Killmail::Table)
                    .col(Killmail::SolarSystemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_SYSTEM_ID)
                    .table(Killmail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_TIME)
                    .table(Killmail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Killmail::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Killmail {
    Table,
    Id,
    KillmailId,
    Hash,
    KillmailTime,
    SolarSystemId,
    VictimCharacterId,
    VictimCorporationId,
    VictimAllianceId,
    VictimShipTypeId,
    DamageTaken,
    PositionX,
    PositionY,
    PositionZ,
    CreatedAt,
}
