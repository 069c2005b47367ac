use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000006_killmail::Killmail;

static IDX_KILLMAIL_ITEM_KILLMAIL_ID: &str = "idx-killmail_item-killmail_id";
static FK_KILLMAIL_ITEM_KILLMAIL_ID: &str = "fk-killmail_item-killmail_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KillmailItem::Table)
                    .if_not_exists()
                    .col(pk_auto(KillmailItem::Id))
                    .col(big_integer(KillmailItem::KillmailId))
                    .col(integer_null(KillmailItem::ParentItemId))
                    .col(big_integer(KillmailItem::ItemTypeId))
                    .col(integer(KillmailItem::Flag))
                    .col(big_integer(KillmailItem::QuantityDropped))
                    .col(big_integer(KillmailItem::QuantityDestroyed))
                    .col(boolean(KillmailItem::Singleton))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_ITEM_KILLMAIL_ID)
                    .table(KillmailItem::Table)
                    .col(KillmailItem::KillmailId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KILLMAIL_ITEM_KILLMAIL_ID)
                    .from_tbl(KillmailItem::Table)
                    .from_col(KillmailItem::KillmailId)
                    .to_tbl(Killmail::Table)
                    .to_col(Killmail::KillmailId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_KILLMAIL_ITEM_KILLMAIL_ID)
                    .table(KillmailItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_ITEM_KILLMAIL_ID)
                    .table(KillmailItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KillmailItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KillmailItem {
    Table,
    Id,
    KillmailId,
    ParentItemId,
    ItemTypeId,
    Flag,
    QuantityDropped,
    QuantityDestroyed,
    Singleton,
}
