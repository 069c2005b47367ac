use sea_orm_migration::{prelude::*, schema::*};

static IDX_KILLMAIL_VIEW_TIME: &str = "idx-killmail_view-killmail_time";
static IDX_KILLMAIL_VIEW_TOTAL_VALUE: &str = "idx-killmail_view-total_value";
static IDX_KILLMAIL_VIEW_NEEDS_BACKFILL: &str = "idx-killmail_view-needs_backfill";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KillmailView::Table)
                    .if_not_exists()
                    .col(big_integer(KillmailView::KillmailId).primary_key())
                    .col(big_integer(KillmailView::Version))
                    .col(timestamp(KillmailView::KillmailTime))
                    .col(big_integer(KillmailView::SolarSystemId))
                    .col(string(KillmailView::SolarSystemName))
                    .col(big_integer(KillmailView::RegionId))
                    .col(string(KillmailView::RegionName))
                    .col(string_len(KillmailView::SpaceType, 16))
                    .col(big_integer_null(KillmailView::VictimCharacterId))
                    .col(string_null(KillmailView::VictimCharacterName))
                    .col(big_integer_null(KillmailView::VictimCorporationId))
                    .col(string_null(KillmailView::VictimCorporationName))
                    .col(string_null(KillmailView::VictimCorporationTicker))
                    .col(big_integer_null(KillmailView::VictimAllianceId))
                    .col(string_null(KillmailView::VictimAllianceName))
                    .col(string_null(KillmailView::VictimAllianceTicker))
                    .col(big_integer(KillmailView::VictimShipTypeId))
                    .col(string(KillmailView::VictimShipName))
                    .col(big_integer_null(KillmailView::FinalBlowCharacterId))
                    .col(string_null(KillmailView::FinalBlowCharacterName))
                    .col(big_integer_null(KillmailView::FinalBlowCorporationId))
                    .col(string_null(KillmailView::FinalBlowCorporationName))
                    .col(big_integer_null(KillmailView::FinalBlowAllianceId))
                    .col(string_null(KillmailView::FinalBlowAllianceName))
                    .col(big_integer_null(KillmailView::FinalBlowShipTypeId))
                    .col(double(KillmailView::ShipValue))
                    .col(double(KillmailView::DroppedValue))
                    .col(double(KillmailView::DestroyedValue))
                    .col(double(KillmailView::TotalValue))
                    .col(integer(KillmailView::AttackerCount))
                    .col(boolean(KillmailView::IsSolo))
                    .col(boolean(KillmailView::IsNpc))
                    .col(boolean(KillmailView::NeedsBackfill))
                    .col(timestamp(KillmailView::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_VIEW_TIME)
                    .table(KillmailView::Table)
                    .col(KillmailView::KillmailTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_VIEW_TOTAL_VALUE)
                    .table(KillmailView::Table)
                    .col(KillmailView::TotalValue)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_VIEW_NEEDS_BACKFILL)
                    .table(KillmailView::Table)
                    .col(KillmailView::NeedsBackfill)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_VIEW_NEEDS_BACKFILL)
                    .table(KillmailView::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_VIEW_TOTAL_VALUE)
                    .table(KillmailView::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_VIEW_TIME)
                    .table(KillmailView::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KillmailView::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KillmailView {
    Table,
    KillmailId,
    Version,
    KillmailTime,
    SolarSystemId,
    SolarSystemName,
    RegionId,
    RegionName,
    SpaceType,
    VictimCharacterId,
    VictimCharacterName,
    VictimCorporationId,
    VictimCorporationName,
    VictimCorporationTicker,
    VictimAllianceId,
    VictimAllianceName,
    VictimAllianceTicker,
    VictimShipTypeId,
    VictimShipName,
    FinalBlowCharacterId,
    FinalBlowCharacterName,
    FinalBlowCorporationId,
    FinalBlowCorporationName,
    FinalBlowAllianceId,
    FinalBlowAllianceName,
    FinalBlowShipTypeId,
    ShipValue,
    DroppedValue,
    DestroyedValue,
    TotalValue,
    AttackerCount,
    IsSolo,
    IsNpc,
    NeedsBackfill,
    UpdatedAt,
}
