use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use killfeed::scheduler::{retention, JobContext};
use killfeed::service::ingest::IngestService;
use killfeed_test_utils::prelude::*;

use crate::service::seed_basic_directory;
use crate::test_utils::{hours_ago, payload_from, TestSetupExt, RESOLVE_TIMEOUT};

/// Expect killmails past the retention age to be pruned along with their
/// derived rows, leaving recent ones intact
#[tokio::test]
async fn prunes_old_killmails_and_derived_rows() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let service = IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);

    let old = payload_from(
        killmail::KillmailBuilder::new(9001)
            .time("2020-01-01T12:00:00Z")
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    service.ingest(&old).await.unwrap();

    let recent = payload_from(
        killmail::KillmailBuilder::new(9002)
            .time(&hours_ago(1))
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    service.ingest(&recent).await.unwrap();

    let context = JobContext {
        db: test.db.clone(),
        esi_client: test.esi_client(),
        resolve_timeout: RESOLVE_TIMEOUT,
        retention_days: 90,
    };
    let deleted = retention::run(context).await.unwrap();
    assert!(deleted > 0);

    let killmails = entity::prelude::Killmail::find().all(&test.db).await?;
    assert_eq!(killmails.len(), 1);
    assert_eq!(killmails[0].killmail_id, 9002);

    let views = entity::prelude::KillmailView::find().all(&test.db).await?;
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].killmail_id, 9002);

    let stale = entity::prelude::KillmailParticipant::find()
        .filter(entity::killmail_participant::Column::KillmailId.eq(9001))
        .count(&test.db)
        .await?;
    assert_eq!(stale, 0);

    Ok(())
}

/// Expect a pass over only-recent data to delete nothing
#[tokio::test]
async fn keeps_everything_inside_the_window() -> Result<(), TestError> {
    let test = test_setup_with_killmail_tables!()?;
    seed_basic_directory(&test).await?;
    let esi_client = test.esi_client();

    let payload = payload_from(
        killmail::KillmailBuilder::new(9001)
            .time(&hours_ago(1))
            .final_blow_attacker(Some(90_000_002), Some(98_000_002))
            .build(),
    );
    IngestService::new(&test.db, &esi_client, RESOLVE_TIMEOUT)
        .ingest(&payload)
        .await
        .unwrap();

    let context = JobContext {
        db: test.db.clone(),
        esi_client: test.esi_client(),
        resolve_timeout: RESOLVE_TIMEOUT,
        retention_days: 90,
    };
    let deleted = retention::run(context).await.unwrap();
    assert_eq!(deleted, 0);

    let killmails = entity::prelude::Killmail::find().count(&test.db).await?;
    assert_eq!(killmails, 1);

    Ok(())
}
