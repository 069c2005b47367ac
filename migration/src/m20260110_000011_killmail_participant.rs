use sea_orm_migration::{prelude::*, schema::*};

static IDX_KILLMAIL_PARTICIPANT_ENTITY: &str = "idx-killmail_participant-entity";
static IDX_KILLMAIL_PARTICIPANT_TIME: &str = "idx-killmail_participant-killmail_time";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KillmailParticipant::Table)
                    .if_not_exists()
                    .col(big_integer(KillmailParticipant::KillmailId))
                    .col(string_len(KillmailParticipant::EntityKind, 16))
                    .col(big_integer(KillmailParticipant::EntityId))
                    .col(big_integer(KillmailParticipant::Version))
                    .col(timestamp(KillmailParticipant::KillmailTime))
                    .col(double(KillmailParticipant::TotalValue))
                    .col(boolean(KillmailParticipant::IsVictim))
                    .col(boolean(KillmailParticipant::IsFinalBlow))
                    .col(boolean(KillmailParticipant::IsAttacker))
                    .col(boolean(KillmailParticipant::IsSolo))
                    .col(boolean(KillmailParticipant::IsNpc))
                    .primary_key(
                        Index::create()
                            .col(KillmailParticipant::KillmailId)
                            .col(KillmailParticipant::EntityKind)
                            .col(KillmailParticipant::EntityId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_PARTICIPANT_ENTITY)
                    .table(KillmailParticipant::Table)
                    .col(KillmailParticipant::EntityKind)
                    .col(KillmailParticipant::EntityId)
                    .col(KillmailParticipant::KillmailTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KILLMAIL_PARTICIPANT_TIME)
                    .table(KillmailParticipant::Table)
                    .col(KillmailParticipant::KillmailTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_PARTICIPANT_TIME)
                    .table(KillmailParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KILLMAIL_PARTICIPANT_ENTITY)
                    .table(KillmailParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KillmailParticipant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KillmailParticipant {
    Table,
    KillmailId,
    EntityKind,
    EntityId,
    Version,
    KillmailTime,
    TotalValue,
    IsVictim,
    IsFinalBlow,
    IsAttacker,
    IsSolo,
    IsNpc,
}
