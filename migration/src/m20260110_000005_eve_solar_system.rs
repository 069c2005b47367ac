use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVE_SOLAR_SYSTEM_REGION_ID: &str = "idx-eve_solar_system-region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveSolarSystem::Table)
                    .if_not_exists()
                    .col(pk_auto(EveSolarSystem::Id))
                    .col(big_integer_uniq(EveSolarSystem::SystemId))
                    .col(string(EveSolarSystem::Name))
                    .col(big_integer(EveSolarSystem::RegionId))
                    .col(string(EveSolarSystem::RegionName))
                    .col(double(EveSolarSystem::SecurityStatus))
                    .col(big_integer(EveSolarSystem::Version))
                    .col(timestamp(EveSolarSystem::CreatedAt))
                    .col(timestamp(EveSolarSystem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_SOLAR_SYSTEM_REGION_ID)
                    .table(EveSolarSystem::Table)
                    .col(EveSolarSystem::RegionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_SOLAR_SYSTEM_REGION_ID)
                    .table(EveSolarSystem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveSolarSystem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveSolarSystem {
    Table,
    Id,
    SystemId,
    Name,
    RegionId,
    RegionName,
    SecurityStatus,
    Version,
    CreatedAt,
    UpdatedAt,
}
