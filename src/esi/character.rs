use serde::Deserialize;

use crate::error::esi::EsiError;

/// Public information for one character.
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Current corporation.
    pub corporation_id: i64,
    /// Current alliance, if any.
    #[serde(default)]
    pub alliance_id: Option<i64>,
    /// Security status, if published.
    #[serde(default)]
    pub security_status: Option<f64>,
}

/// Character endpoints.
pub struct CharacterApi<'a> {
    pub(crate) client: &'a super::Client,
}

impl CharacterApi<'_> {
    /// Fetches public information for a character.
    pub async fn get_character(&self, character_id: i64) -> Result<Character, EsiError> {
        self.client
            .get_json(&format!("/characters/{}/", character_id))
            .await
    }
}
