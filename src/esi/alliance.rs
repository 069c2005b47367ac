use serde::Deserialize;

use crate::error::esi::EsiError;

/// Public information for one alliance.
#[derive(Debug, Clone, Deserialize)]
pub struct Alliance {
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub ticker: String,
}

/// Alliance endpoints.
pub struct AllianceApi<'a> {
    pub(crate) client: &'a super::Client,
}

impl AllianceApi<'_> {
    /// Fetches public information for an alliance.
    pub async fn get_alliance(&self, alliance_id: i64) -> Result<Alliance, EsiError> {
        self.client
            .get_json(&format!("/alliances/{}/", alliance_id))
            .await
    }
}
