use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceSnapshot::Table)
                    .if_not_exists()
                    .col(big_integer(PriceSnapshot::TypeId))
                    .col(big_integer(PriceSnapshot::RegionId))
                    .col(date(PriceSnapshot::SnapshotDate))
                    .col(double(PriceSnapshot::Average))
                    .col(double(PriceSnapshot::Highest))
                    .col(double(PriceSnapshot::Lowest))
                    .col(big_integer(PriceSnapshot::OrderCount))
                    .col(big_integer(PriceSnapshot::Volume))
                    .primary_key(
                        Index::create()
                            .col(PriceSnapshot::TypeId)
                            .col(PriceSnapshot::RegionId)
                            .col(PriceSnapshot::SnapshotDate),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceSnapshot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PriceSnapshot {
    Table,
    TypeId,
    RegionId,
    SnapshotDate,
    Average,
    Highest,
    Lowest,
    OrderCount,
    Volume,
}
