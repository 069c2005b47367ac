use killfeed::data::eve::SolarSystemRepository;
use killfeed::service::directory::{DirectoryService, ResolutionCache};
use killfeed_test_utils::fixtures::eve::factory;
use killfeed_test_utils::prelude::*;

use crate::test_utils::{TestSetupExt, RESOLVE_TIMEOUT};

/// Expect the system, constellation, and region lookups to compose into one
/// stored record
#[tokio::test]
async fn resolves_solar_system_from_upstream() -> Result<(), TestError> {
    let mut test = test_setup_with_killmail_tables!()?;

    let system = factory::solar_system_body("Amarr", 20_000_322, 0.9);
    let constellation = factory::constellation_body(10_000_043);
    let region = factory::region_body("Domain");
    let mocks = vec![
        test.eve()
            .create_solar_system_endpoint(30_002_187, &system, 1),
        test.eve()
            .create_constellation_endpoint(20_000_322, &constellation, 1),
        test.eve().create_region_endpoint(10_000_043, &region, 1),
    ];
    test.mocks.extend(mocks);

    let esi_client = test.esi_client();
    let directory = DirectoryService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let mut cache = ResolutionCache::new();

    let resolution = directory
        .resolve_solar_system(&mut cache, 30_002_187)
        .await
        .unwrap();

    let model = resolution.resolved().unwrap();
    assert_eq!(model.name, "Amarr");
    assert_eq!(model.region_id, 10_000_043);
    assert_eq!(model.region_name, "Domain");
    assert_eq!(model.security_status, 0.9);

    // The composed record is cached locally; a fresh pass must not refetch.
    let stored = SolarSystemRepository::new(&test.db)
        .get_by_system_id(30_002_187)
        .await?;
    assert!(stored.is_some());

    let mut cache = ResolutionCache::new();
    let resolution = directory
        .resolve_solar_system(&mut cache, 30_002_187)
        .await
        .unwrap();
    assert!(!resolution.is_unresolved());

    test.assert_mocks();
    Ok(())
}

/// Expect corporation, alliance, and item type lookups to fall back to the
/// upstream and persist what it returns
#[tokio::test]
async fn resolves_entities_from_upstream() -> Result<(), TestError> {
    let mut test = test_setup_with_killmail_tables!()?;

    let corporation = factory::corporation_body("Viziam", "VIZ", Some(99_000_001));
    let alliance = factory::alliance_body("Amarr Loyalists", "LOYAL");
    let item_type = factory::item_type_body("Punisher", Some(25));
    let mocks = vec![
        test.eve()
            .create_corporation_endpoint(98_000_777, &corporation, 1),
        test.eve().create_alliance_endpoint(99_000_001, &alliance, 1),
        test.eve().create_item_type_endpoint(597, &item_type, 1),
    ];
    test.mocks.extend(mocks);

    let esi_client = test.esi_client();
    let directory = DirectoryService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let mut cache = ResolutionCache::new();

    let corporation = directory
        .resolve_corporation(&mut cache, 98_000_777)
        .await
        .unwrap()
        .resolved()
        .unwrap();
    assert_eq!(corporation.name, "Viziam");
    assert_eq!(corporation.ticker, "VIZ");

    let alliance = directory
        .resolve_alliance(&mut cache, 99_000_001)
        .await
        .unwrap()
        .resolved()
        .unwrap();
    assert_eq!(alliance.ticker, "LOYAL");

    let item_type = directory
        .resolve_item_type(&mut cache, 597)
        .await
        .unwrap()
        .resolved()
        .unwrap();
    assert_eq!(item_type.name, "Punisher");

    test.assert_mocks();
    Ok(())
}

/// Expect an upstream server error to degrade to an unresolved lookup
#[tokio::test]
async fn failing_upstream_degrades_to_unresolved() -> Result<(), TestError> {
    let mut test = test_setup_with_killmail_tables!()?;

    let mock = test.eve().create_failing_endpoint("/characters/90000555/");
    test.mocks.push(mock);

    let esi_client = test.esi_client();
    let directory = DirectoryService::new(&test.db, &esi_client, RESOLVE_TIMEOUT);
    let mut cache = ResolutionCache::new();

    let resolution = directory
        .resolve_character(&mut cache, 90_000_555)
        .await
        .unwrap();
    assert!(resolution.is_unresolved());

    Ok(())
}
