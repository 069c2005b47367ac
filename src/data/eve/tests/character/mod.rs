use killfeed_test_utils::prelude::*;

use crate::data::eve::CharacterRepository;
use crate::esi::character::Character;

mod get_by_character_id;
mod upsert;

fn character(name: &str, corporation_id: i64) -> Character {
    Character {
        name: name.to_string(),
        corporation_id,
        alliance_id: None,
        security_status: Some(0.5),
    }
}
