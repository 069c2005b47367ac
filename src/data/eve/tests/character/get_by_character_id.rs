use super::*;

/// Expect Some for a stored character
#[tokio::test]
async fn finds_stored_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCharacter)?;
    killfeed_test_utils::fixtures::eve::data::insert_character(
        &test.db,
        90_000_001,
        "Pilot One",
        98_000_001,
        None,
    )
    .await?;

    let repo = CharacterRepository::new(&test.db);
    let found = repo.get_by_character_id(90_000_001).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Pilot One");

    Ok(())
}

/// Expect None for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCharacter)?;

    let repo = CharacterRepository::new(&test.db);
    let found = repo.get_by_character_id(12_345).await?;

    assert!(found.is_none());

    Ok(())
}
