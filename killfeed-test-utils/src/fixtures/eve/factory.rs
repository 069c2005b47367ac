//! Canned upstream response bodies.
//!
//! Shapes mirror the ESI endpoints the engine consumes; unknown fields are
//! ignored by the client, so only the consumed subset is included.

use serde_json::{json, Value};

pub fn character_body(name: &str, corporation_id: i64, alliance_id: Option<i64>) -> Value {
    json!({
        "name": name,
        "corporation_id": corporation_id,
        "alliance_id": alliance_id,
        "security_status": 0.5,
    })
}

pub fn corporation_body(name: &str, ticker: &str, alliance_id: Option<i64>) -> Value {
    json!({
        "name": name,
        "ticker": ticker,
        "alliance_id": alliance_id,
        "member_count": 42,
    })
}

pub fn alliance_body(name: &str, ticker: &str) -> Value {
    json!({
        "name": name,
        "ticker": ticker,
    })
}

pub fn item_type_body(name: &str, group_id: Option<i64>) -> Value {
    json!({
        "name": name,
        "group_id": group_id,
    })
}

pub fn solar_system_body(name: &str, constellation_id: i64, security_status: f64) -> Value {
    json!({
        "name": name,
        "constellation_id": constellation_id,
        "security_status": security_status,
    })
}

pub fn constellation_body(region_id: i64) -> Value {
    json!({
        "region_id": region_id,
    })
}

pub fn region_body(name: &str) -> Value {
    json!({
        "name": name,
    })
}

/// One market history day per `(date, average)` pair, oldest first.
pub fn market_history_body(days: &[(&str, f64)]) -> Value {
    Value::Array(
        days.iter()
            .map(|(date, average)| {
                json!({
                    "date": date,
                    "average": average,
                    "highest": average * 1.1,
                    "lowest": average * 0.9,
                    "order_count": 100,
                    "volume": 1000,
                })
            })
            .collect(),
    )
}
