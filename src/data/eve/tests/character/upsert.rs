use super::*;

/// Expect Ok when upserting a new character
#[tokio::test]
async fn creates_new_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCharacter)?;

    let repo = CharacterRepository::new(&test.db);
    let created = repo
        .upsert(90_000_001, character("Pilot One", 98_000_001), 10)
        .await?;

    assert_eq!(created.character_id, 90_000_001);
    assert_eq!(created.name, "Pilot One");
    assert_eq!(created.corporation_id, 98_000_001);
    assert_eq!(created.version, 10);

    Ok(())
}

/// Expect a later version to replace the stored row
#[tokio::test]
async fn replaces_with_higher_version() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCharacter)?;

    let repo = CharacterRepository::new(&test.db);
    repo.upsert(90_000_001, character("Pilot One", 98_000_001), 10)
        .await?;
    let updated = repo
        .upsert(90_000_001, character("Pilot Renamed", 98_000_002), 20)
        .await?;

    assert_eq!(updated.name, "Pilot Renamed");
    assert_eq!(updated.corporation_id, 98_000_002);
    assert_eq!(updated.version, 20);

    Ok(())
}

/// Expect a stale version to be discarded, returning the stored row unchanged
#[tokio::test]
async fn discards_lower_version() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCharacter)?;

    let repo = CharacterRepository::new(&test.db);
    repo.upsert(90_000_001, character("Pilot One", 98_000_001), 20)
        .await?;
    let kept = repo
        .upsert(90_000_001, character("Stale Name", 98_000_009), 10)
        .await?;

    assert_eq!(kept.name, "Pilot One");
    assert_eq!(kept.corporation_id, 98_000_001);
    assert_eq!(kept.version, 20);

    Ok(())
}

/// Expect an equal version to be discarded as well
#[tokio::test]
async fn discards_equal_version() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCharacter)?;

    let repo = CharacterRepository::new(&test.db);
    repo.upsert(90_000_001, character("Pilot One", 98_000_001), 10)
        .await?;
    let kept = repo
        .upsert(90_000_001, character("Same Version", 98_000_009), 10)
        .await?;

    assert_eq!(kept.name, "Pilot One");

    Ok(())
}

/// Expect Error when the table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let repo = CharacterRepository::new(&test.db);
    let result = repo
        .upsert(90_000_001, character("Pilot One", 98_000_001), 10)
        .await;

    assert!(result.is_err());

    Ok(())
}
