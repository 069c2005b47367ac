use chrono::{Duration, Utc};

use killfeed::data::view::ParticipantRepository;
use killfeed::model::period::Period;
use killfeed::service::ingest::IngestService;
use killfeed::service::stats::StatsService;
use killfeed_test_utils::fixtures::eve::data;
use killfeed_test_utils::prelude::*;

use entity::sea_orm_active_enums::EntityKind;

use crate::service::seed_basic_directory;
use crate::test_utils::{hours_ago, payload_from, TestSetupExt, RESOLVE_TIMEOUT};

/// Expect 5 kills and no losses to yield 100% efficiency and a ratio of 5
#[tokio::test]
async fn five_kills_no_losses() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let week_ago = (Utc::now() - Duration::days(7)).date_naive();
    data::insert_price_snapshot(&test.db, 587, 10_000_002, week_ago, 10_000_000.0).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    for i in 0..5i64 {
        let payload = payload_from(
            killmail::KillmailBuilder::new(9001 + i)
                .time(&hours_ago(i + 1))
                .final_blow_attacker(Some(90_000_002), Some(98_000_002))
                .build(),
        );
        service.ingest(&payload).await.unwrap();
    }

    let stats = StatsService::new(&test.db)
        .entity_stats(EntityKind::Character, 90_000_002, Period::Week)
        .await
        .unwrap();

    assert_eq!(stats.kills, 5);
    assert_eq!(stats.losses, 0);
    assert_eq!(stats.solo_kills, 5);
    assert_eq!(stats.isk_destroyed, 50_000_000.0);
    assert_eq!(stats.efficiency, 100.0);
    assert_eq!(stats.kill_loss_ratio, 5.0);
    assert!(stats.last_kill_at.is_some());
    assert!(stats.last_loss_at.is_none());

    Ok(())
}

/// Expect kills plus losses to equal the count of final-blow-or-victim
/// participations in the window
#[tokio::test]
async fn kills_plus_losses_match_participations() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);

    // Two kills credited to Killer Corp
    for i in 0..2i64 {
        let payload = payload_from(
            killmail::KillmailBuilder::new(9001 + i)
                .time(&hours_ago(i + 1))
                .final_blow_attacker(Some(90_000_002), Some(98_000_002))
                .build(),
        );
        service.ingest(&payload).await.unwrap();
    }

    // One loss where Killer Corp is the victim side
    let loss = payload_from(
        killmail::KillmailBuilder::new(9010)
            .time(&hours_ago(3))
            .victim(Some(90_000_002), Some(98_000_002), None, 587)
            .final_blow_attacker(Some(90_000_001), Some(98_000_001))
            .build(),
    );
    service.ingest(&loss).await.unwrap();

    let stats = StatsService::new(&test.db)
        .entity_stats(EntityKind::Corporation, 98_000_002, Period::Day)
        .await
        .unwrap();

    let rows = ParticipantRepository::new(&test.db)
        .scan_entity(
            EntityKind::Corporation,
            98_000_002,
            Period::Day.cutoff(Utc::now()),
        )
        .await?;
    let participations = rows
        .iter()
        .filter(|row| row.is_final_blow || row.is_victim)
        .count() as u64;

    assert_eq!(stats.kills, 2);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.kills + stats.losses, participations);

    Ok(())
}

/// Expect window cutoffs to exclude older participations
#[tokio::test]
async fn window_excludes_older_kills() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .time(&hours_ago(2))
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let stats = StatsService::new(&test.db);

    let hour = stats
        .entity_stats(EntityKind::Character, 90_000_002, Period::Hour)
        .await
        .unwrap();
    assert_eq!(hour.kills, 0);

    let day = stats
        .entity_stats(EntityKind::Character, 90_000_002, Period::Day)
        .await
        .unwrap();
    assert_eq!(day.kills, 1);

    Ok(())
}
