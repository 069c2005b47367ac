use serde::Deserialize;

use crate::error::esi::EsiError;

/// Public information for one corporation.
#[derive(Debug, Clone, Deserialize)]
pub struct Corporation {
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub ticker: String,
    /// Current alliance, if any.
    #[serde(default)]
    pub alliance_id: Option<i64>,
    /// Member count, if published.
    #[serde(default)]
    pub member_count: Option<i32>,
}

/// Corporation endpoints.
pub struct CorporationApi<'a> {
    pub(crate) client: &'a super::Client,
}

impl CorporationApi<'_> {
    /// Fetches public information for a corporation.
    pub async fn get_corporation(&self, corporation_id: i64) -> Result<Corporation, EsiError> {
        self.client
            .get_json(&format!("/corporations/{}/", corporation_id))
            .await
    }
}
