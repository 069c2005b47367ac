use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveItemType::Table)
                    .if_not_exists()
                    .col(pk_auto(EveItemType::Id))
                    .col(big_integer_uniq(EveItemType::TypeId))
                    .col(string(EveItemType::Name))
                    .col(big_integer_null(EveItemType::GroupId))
                    .col(big_integer(EveItemType::Version))
                    .col(timestamp(EveItemType::CreatedAt))
                    .col(timestamp(EveItemType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EveItemType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveItemType {
    Table,
    Id,
    TypeId,
    Name,
    GroupId,
    Version,
    CreatedAt,
    UpdatedAt,
}
