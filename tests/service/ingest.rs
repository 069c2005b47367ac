use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use killfeed::data::view::KillmailViewRepository;
use killfeed::model::ingest::IngestOutcome;
use killfeed::model::period::Period;
use killfeed::service::ingest::IngestService;
use killfeed::service::stats::StatsService;
use killfeed_test_utils::prelude::*;

use crate::service::seed_basic_directory;
use crate::test_utils::{payload_from, TestSetupExt, RESOLVE_TIMEOUT};

use entity::sea_orm_active_enums::EntityKind;

/// Expect Accepted with a fully resolved view row when the directory is warm
#[tokio::test]
async fn accepts_new_killmail() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let outcome = service.ingest(&payload).await.unwrap();

    assert_eq!(outcome, IngestOutcome::Accepted { killmail_id: 9001 });

    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert_eq!(view.victim_character_name.as_deref(), Some("Victim Pilot"));
    assert_eq!(view.victim_corporation_ticker.as_deref(), Some("VCTM"));
    assert_eq!(
        view.final_blow_character_name.as_deref(),
        Some("Killer Pilot")
    );
    assert_eq!(view.solar_system_name, "Jita");
    assert_eq!(view.region_name, "The Forge");
    assert!(!view.needs_backfill);

    Ok(())
}

/// Expect re-ingesting the identical payload to change nothing
#[tokio::test]
async fn reingest_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let first = service.ingest(&payload).await.unwrap();
    let second = service.ingest(&payload).await.unwrap();

    assert_eq!(first, IngestOutcome::Accepted { killmail_id: 9001 });
    assert_eq!(second, IngestOutcome::Duplicate);

    let stored = entity::prelude::Killmail::find()
        .filter(entity::killmail::Column::KillmailId.eq(9001))
        .count(&test.db)
        .await?;
    assert_eq!(stored, 1);

    let stats = StatsService::new(&test.db)
        .entity_stats(EntityKind::Character, 90_000_002, Period::All)
        .await
        .unwrap();
    assert_eq!(stats.kills, 1);

    Ok(())
}

/// Expect Rejected for a payload with no attackers, with nothing stored
#[tokio::test]
async fn rejects_payload_without_attackers() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(killmail::KillmailBuilder::new(9001).build());

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let outcome = service.ingest(&payload).await.unwrap();

    assert!(matches!(outcome, IngestOutcome::Rejected(_)));

    let stored = entity::prelude::Killmail::find().count(&test.db).await?;
    assert_eq!(stored, 0);

    Ok(())
}

/// Expect unresolved references to degrade to placeholders, not failure
#[tokio::test]
async fn unresolved_references_degrade_to_placeholders() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let outcome = service.ingest(&payload).await.unwrap();

    assert_eq!(outcome, IngestOutcome::Accepted { killmail_id: 9001 });

    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert_eq!(view.victim_character_name.as_deref(), Some("Unknown"));
    assert_eq!(view.victim_corporation_ticker.as_deref(), Some("???"));
    assert_eq!(view.solar_system_name, "Unknown");
    assert!(view.needs_backfill);

    Ok(())
}
