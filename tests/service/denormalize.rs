use chrono::NaiveDate;
use sea_orm::EntityTrait;

use killfeed::data::view::KillmailViewRepository;
use killfeed::service::denormalize::DenormalizeService;
use killfeed::service::directory::ResolutionCache;
use killfeed::service::ingest::IngestService;
use killfeed_test_utils::fixtures::eve::data;
use killfeed_test_utils::prelude::*;

use entity::sea_orm_active_enums::SpaceType;

use crate::service::seed_basic_directory;
use crate::test_utils::{payload_from, TestSetupExt, RESOLVE_TIMEOUT};

const SNAPSHOT_REGION: i64 = 10_000_002;

fn snapshot_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Expect total value to decompose into ship, dropped, and destroyed parts
#[tokio::test]
async fn decomposes_killmail_value() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    data::insert_price_snapshot(&test.db, 587, SNAPSHOT_REGION, snapshot_date(), 10_000_000.0)
        .await?;
    data::insert_price_snapshot(&test.db, 34, SNAPSHOT_REGION, snapshot_date(), 1_000_000.0)
        .await?;
    data::insert_price_snapshot(&test.db, 35, SNAPSHOT_REGION, snapshot_date(), 500_000.0)
        .await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .item(34, 27, 0, 1)
            .item(35, 5, 1, 0)
            .build(),
    );

    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert_eq!(view.ship_value, 10_000_000.0);
    assert_eq!(view.destroyed_value, 1_000_000.0);
    assert_eq!(view.dropped_value, 500_000.0);
    assert_eq!(view.total_value, 11_500_000.0);
    assert_eq!(
        view.total_value,
        view.ship_value + view.dropped_value + view.destroyed_value
    );

    Ok(())
}

/// Expect container contents to be stored under their parent row and priced
/// into the kill value like any other item
#[tokio::test]
async fn prices_container_contents() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    data::insert_price_snapshot(&test.db, 587, SNAPSHOT_REGION, snapshot_date(), 10_000_000.0)
        .await?;
    data::insert_price_snapshot(&test.db, 3467, SNAPSHOT_REGION, snapshot_date(), 2_000_000.0)
        .await?;
    data::insert_price_snapshot(&test.db, 34, SNAPSHOT_REGION, snapshot_date(), 1_000_000.0)
        .await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .container(3467, 5, vec![killmail::content_item(34, 2, 0)])
            .build(),
    );

    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let items = entity::prelude::KillmailItem::find().all(&test.db).await?;
    assert_eq!(items.len(), 2);
    let parent = items.iter().find(|item| item.item_type_id == 3467).unwrap();
    let child = items.iter().find(|item| item.item_type_id == 34).unwrap();
    assert_eq!(parent.parent_item_id, None);
    assert_eq!(child.parent_item_id, Some(parent.id));
    assert!(items
        .iter()
        .all(|item| item.quantity_dropped + item.quantity_destroyed > 0));

    // Container dropped once at 2M plus two dropped contents at 1M each.
    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert_eq!(view.dropped_value, 4_000_000.0);
    assert_eq!(view.total_value, 14_000_000.0);

    Ok(())
}

/// Expect a single identified final-blow attacker to mark the kill solo
#[tokio::test]
async fn marks_single_attacker_solo() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );

    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert_eq!(view.attacker_count, 1);
    assert!(view.is_solo);
    assert!(!view.is_npc);

    Ok(())
}

/// Expect a kill with only characterless attackers to be flagged NPC, not solo
#[tokio::test]
async fn marks_characterless_attackers_npc() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(None, Some(98_000_002))
            .build(),
    );

    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert!(view.is_npc);
    assert!(!view.is_solo);

    Ok(())
}

/// Expect a wormhole-range region id to classify as w-space regardless of
/// security status
#[tokio::test]
async fn classifies_wormhole_space_by_region() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    data::insert_solar_system(&test.db, 31_000_005, "J123456", 11_000_005, "D-R00018", -0.99)
        .await?;
    data::insert_item_type(&test.db, 587, "Rifter").await?;
    data::insert_character(&test.db, 90_000_001, "Victim Pilot", 98_000_001, None).await?;
    data::insert_character(&test.db, 90_000_002, "Killer Pilot", 98_000_002, None).await?;
    data::insert_corporation(&test.db, 98_000_001, "Victim Corp", "VCTM", None).await?;
    data::insert_corporation(&test.db, 98_000_002, "Killer Corp", "KLLR", None).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .solar_system(31_000_005)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );

    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let view = KillmailViewRepository::new(&test.db)
        .get(9001)
        .await?
        .unwrap();
    assert_eq!(view.space_type, SpaceType::WSpace);

    Ok(())
}

/// Expect re-denormalization after a late directory write to supersede the
/// placeholder row
#[tokio::test]
async fn redenormalization_supersedes_placeholders() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    // Victim character unknown at ingest time
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

    let view_repo = KillmailViewRepository::new(&test.db);
    let placeholder = view_repo.get(9001).await?.unwrap();
    assert_eq!(placeholder.victim_character_name.as_deref(), Some("Unknown"));
    assert!(placeholder.needs_backfill);

    data::insert_character(&test.db, 90_000_777, "Late Pilot", 98_000_001, None).await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let mut cache = ResolutionCache::new();
    DenormalizeService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .denormalize(&mut cache, 9001)
        .await
        .unwrap();

    let resolved = view_repo.get(9001).await?.unwrap();
    assert_eq!(resolved.victim_character_name.as_deref(), Some("Late Pilot"));
    assert!(!resolved.needs_backfill);
    assert!(resolved.version > placeholder.version);

    Ok(())
}

/// Expect a write carrying a lower version to leave the stored row untouched
#[tokio::test]
async fn stale_view_write_is_discarded() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );

    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let view_repo = KillmailViewRepository::new(&test.db);
    let current = view_repo.get(9001).await?.unwrap();

    let mut stale = current.clone();
    stale.version = 1;
    stale.solar_system_name = "Stale System".to_string();
    view_repo.put(stale).await?;

    let stored = view_repo.get(9001).await?.unwrap();
    assert_eq!(stored.solar_system_name, "Jita");
    assert_eq!(stored.version, current.version);

    Ok(())
}
