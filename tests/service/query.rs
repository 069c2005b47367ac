use killfeed::config::FilterConfig;
use killfeed::model::period::Period;
use killfeed::model::slot::SlotGroup;
use killfeed::model::stats::KillmailKind;
use killfeed::service::ingest::IngestService;
use killfeed::service::query::QueryService;
use killfeed_test_utils::fixtures::eve::data;
use killfeed_test_utils::prelude::*;

use entity::sea_orm_active_enums::EntityKind;

use crate::service::seed_basic_directory;
use crate::test_utils::{hours_ago, payload_from, TestSetupExt, RESOLVE_TIMEOUT};

/// Expect flag 27 in the high-slot bucket and an unmapped flag in the
/// catch-all bucket
#[tokio::test]
async fn groups_items_into_slot_buckets() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .item(34, 27, 0, 1)
            .item(35, 99, 1, 0)
            .build(),
    );
    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let filter = FilterConfig::default();
    let buckets = QueryService::new(&test.db, &filter)
        .killmail_items(9001)
        .await
        .unwrap();

    let high = buckets.get(&SlotGroup::High).unwrap();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].item_type_id, 34);

    let other = buckets.get(&SlotGroup::Other).unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].item_type_id, 35);

    Ok(())
}

/// Expect the most-valuable ordering to be total and stable: equal values
/// tie-break by ascending killmail id, and repeated calls agree
#[tokio::test]
async fn most_valuable_order_is_deterministic() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let snapshot_date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    data::insert_price_snapshot(&test.db, 587, 10_000_002, snapshot_date, 10_000_000.0).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    for killmail_id in [9002i64, 9001, 9003] {
        let payload = payload_from(
            killmail::KillmailBuilder::new(killmail_id)
                .final_blow_attacker(Some(90_000_002), Some(98_000_002))
                .build(),
        );
        service.ingest(&payload).await.unwrap();
    }

    let filter = FilterConfig::default();
    let query = QueryService::new(&test.db, &filter);

    let first = query
        .most_valuable_kills(Period::All, 10, None)
        .await
        .unwrap();
    let second = query
        .most_valuable_kills(Period::All, 10, None)
        .await
        .unwrap();

    let first_ids: Vec<i64> = first.iter().map(|row| row.killmail_id).collect();
    let second_ids: Vec<i64> = second.iter().map(|row| row.killmail_id).collect();

    assert_eq!(first_ids, vec![9001, 9002, 9003]);
    assert_eq!(first_ids, second_ids);

    Ok(())
}

/// Expect the frontpage to narrow to followed corporations when configured
#[tokio::test]
async fn frontpage_honors_followed_filter() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);

    // Victim in the followed corporation
    let followed = payload_from(
        killmail::KillmailBuilder::new(9001)
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    service.ingest(&followed).await.unwrap();

    // Unrelated parties on both sides
    let unrelated = payload_from(
        killmail::KillmailBuilder::new(9002)
            .victim(Some(90_000_009), Some(98_000_009), None, 587)
            .final_blow_attacker(Some(90_000_008), Some(98_000_008))
            .build(),
    );
    service.ingest(&unrelated).await.unwrap();

    let filter = FilterConfig {
        corporation_ids: vec![98_000_001],
        alliance_ids: Vec::new(),
    };
    let page = QueryService::new(&test.db, &filter)
        .frontpage(0, 50)
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].killmail_id, 9001);

    // An empty filter matches everything
    let empty = FilterConfig::default();
    let page = QueryService::new(&test.db, &empty)
        .frontpage(0, 50)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);

    Ok(())
}

/// Expect entity killmail listings to split by kill and loss side
#[tokio::test]
async fn lists_entity_killmails_by_side() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);

    for i in 0..2i64 {
        let kill = payload_from(
            killmail::KillmailBuilder::new(9001 + i)
                .time(&hours_ago(i + 1))
                .final_blow_attacker(Some(90_000_002), Some(98_000_002))
                .build(),
        );
        service.ingest(&kill).await.unwrap();
    }

    let loss = payload_from(
        killmail::KillmailBuilder::new(9010)
            .time(&hours_ago(3))
            .victim(Some(90_000_002), Some(98_000_002), None, 587)
            .final_blow_attacker(Some(90_000_001), Some(98_000_001))
            .build(),
    );
    service.ingest(&loss).await.unwrap();

    let filter = FilterConfig::default();
    let query = QueryService::new(&test.db, &filter);

    let kills = query
        .entity_killmails(EntityKind::Character, 90_000_002, KillmailKind::Kills, 0, 50)
        .await
        .unwrap();
    let kill_ids: Vec<i64> = kills.iter().map(|row| row.killmail_id).collect();
    assert_eq!(kill_ids, vec![9001, 9002]);

    let losses = query
        .entity_killmails(
            EntityKind::Character,
            90_000_002,
            KillmailKind::Losses,
            0,
            50,
        )
        .await
        .unwrap();
    assert_eq!(losses.len(), 1);
    assert_eq!(losses[0].killmail_id, 9010);

    let all = query
        .entity_killmails(EntityKind::Character, 90_000_002, KillmailKind::All, 0, 50)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Expect top entities to credit every attacker, ranked with id tie-break
#[tokio::test]
async fn ranks_top_entities_by_attacker_credit() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    data::insert_character(&test.db, 90_000_003, "Wing Pilot", 98_000_002, None).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);

    // Two kills with both attackers on board, one with only the first
    for i in 0..2i64 {
        let payload = payload_from(
            killmail::KillmailBuilder::new(9001 + i)
                .time(&hours_ago(i + 1))
                .attacker(Some(90_000_003), Some(98_000_002))
                .final_blow_attacker(Some(90_000_002), Some(98_000_002))
                .build(),
        );
        service.ingest(&payload).await.unwrap();
    }
    let solo = payload_from(
        killmail::KillmailBuilder::new(9003)
            .time(&hours_ago(3))
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    service.ingest(&solo).await.unwrap();

    let filter = FilterConfig::default();
    let top = QueryService::new(&test.db, &filter)
        .top_entities(EntityKind::Character, Period::Day, 10)
        .await
        .unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].entity_id, 90_000_002);
    assert_eq!(top[0].kills, 3);
    assert_eq!(top[1].entity_id, 90_000_003);
    assert_eq!(top[1].kills, 2);

    Ok(())
}
