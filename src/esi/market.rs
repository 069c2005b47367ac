use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::esi::EsiError;

/// One day of market history for a type in a region.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketHistoryDay {
    /// Trading day.
    pub date: NaiveDate,
    /// Average traded price.
    pub average: f64,
    /// Highest traded price.
    pub highest: f64,
    /// Lowest traded price.
    pub lowest: f64,
    /// Number of orders.
    pub order_count: i64,
    /// Units traded.
    pub volume: i64,
}

/// Market endpoints.
pub struct MarketApi<'a> {
    pub(crate) client: &'a super::Client,
}

impl MarketApi<'_> {
    /// Fetches daily market history for a type in a region, oldest first.
    pub async fn get_history(
        &self,
        region_id: i64,
        type_id: i64,
    ) -> Result<Vec<MarketHistoryDay>, EsiError> {
        self.client
            .get_json(&format!(
                "/markets/{}/history/?type_id={}",
                region_id, type_id
            ))
            .await
    }
}
