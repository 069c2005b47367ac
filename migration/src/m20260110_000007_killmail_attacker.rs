use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000006_killmail::Killmail;

static IDX_KILLMAIL_ATTACKER_KILLMAIL_ID: &str = "idx-killmail_attacker-killmail_id";
static FK_KILLMAIL_ATTACKER_KILLMAIL_ID: &str = "fk-killmail_attacker-killmail_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KillmailAttacker::Table)
                    .if_not_exists()
                    .col(pk_auto(KillmailAttacker::Id))
                    .col(big_integer(KillmailAttacker::KillmailId))
                    .col(big_integer_null(KillmailAttacker::CharacterId))
                    .col(big_integer_null(KillmailAttacker::CorporationId))
                    .col(big_integer_null(KillmailAttacker::AllianceId))
                    .col(big_integer_null(KillmailAttacker::ShipTypeId))
                    .col(big_integer_null(KillmailAttacker::WeaponTypeId))
                    .col(big_integer(KillmailAttacker::DamageDone))
                    .col(boolean(KillmailAttacker::FinalBlow))
                    .col(double_null(KillmailAttacker::SecurityStatus))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_ATTACKER_KILLMAIL_ID)
                    .table(KillmailAttacker::Table)
                    .col(KillmailAttacker::KillmailId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KILLMAIL_ATTACKER_KILLMAIL_ID)
                    .from_tbl(KillmailAttacker::Table)
                    .from_col(KillmailAttacker::KillmailId)
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
                    .name(FK_KILLMAIL_ATTACKER_KILLMAIL_ID)
                    .table(KillmailAttacker::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_ATTACKER_KILLMAIL_ID)
                    .table(KillmailAttacker::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KillmailAttacker::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KillmailAttacker {
    Table,
    Id,
    KillmailId,
    CharacterId,
    CorporationId,
    AllianceId,
    ShipTypeId,
    WeaponTypeId,
    DamageDone,
    FinalBlow,
    SecurityStatus,
}
