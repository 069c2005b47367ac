use killfeed::scheduler::{backfill, JobContext};
use killfeed::service::ingest::IngestService;
use killfeed_test_utils::fixtures::eve::factory;
use killfeed_test_utils::prelude::*;

use crate::service::seed_basic_directory;
use crate::test_utils::{payload_from, TestSetupExt, RESOLVE_TIMEOUT};

fn job_context(test: &TestSetup) -> JobContext {
    JobContext {
        db: test.db.clone(),
        esi_client: test.esi_client(),
        resolve_timeout: RESOLVE_TIMEOUT,
        retention_days: 90,
    }
}

/// Expect a placeholder view row to be re-resolved once the upstream
/// answers for the missing character
#[tokio::test]
async fn resolves_placeholder_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    // Victim character unknown both locally and upstream at ingest time.
    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .victim(Some(90_000_777), Some(98_000_001), None, 587)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let view = killfeed::data::view::KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert!(view.needs_backfill);
    assert_eq!(view.victim_character_name, Some("Unknown".to_string()));

    // The upstream now knows the character.
    let body = factory::character_body("Late Pilot", 98_000_001, None);
    let mock = test.eve().create_character_endpoint(90_000_777, &body, 1);
    test.mocks.push(mock);

    // Denormalization versions have millisecond granularity.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let resolved = backfill::run(job_context(&test)).await.unwrap();
    assert_eq!(resolved, 1);

    let view = killfeed::data::view::KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert!(!view.needs_backfill);
    assert_eq!(view.victim_character_name, Some("Late Pilot".to_string()));

    test.assert_mocks();
    Ok(())
}

/// Expect a row whose references still do not resolve to stay marked
#[tokio::test]
async fn leaves_unresolvable_rows_marked() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .victim(Some(90_000_777), Some(98_000_001), None, 587)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    // No mock for the character, so the lookup keeps failing.
    let resolved = backfill::run(job_context(&test)).await.unwrap();
    assert_eq!(resolved, 0);

    let view = killfeed::data::view::KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert!(view.needs_backfill);

    Ok(())
}
