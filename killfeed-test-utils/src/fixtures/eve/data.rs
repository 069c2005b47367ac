//! Direct database inserts for directory and price rows.
//!
//! Bypasses the resolution path entirely, for tests that want a warm
//! directory without any mock endpoints.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn insert_character(
    db: &DatabaseConnection,
    character_id: i64,
    name: &str,
    corporation_id: i64,
    alliance_id: Option<i64>,
) -> Result<entity::eve_character::Model, TestError> {
    let now = Utc::now().naive_utc();

    let model = entity::eve_character::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        name: ActiveValue::Set(name.to_string()),
        corporation_id: ActiveValue::Set(corporation_id),
        alliance_id: ActiveValue::Set(alliance_id),
        security_status: ActiveValue::Set(Some(0.5)),
        version: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_corporation(
    db: &DatabaseConnection,
    corporation_id: i64,
    name: &str,
    ticker: &str,
    alliance_id: Option<i64>,
) -> Result<entity::eve_corporation::Model, TestError> {
    let now = Utc::now().naive_utc();

    let model = entity::eve_corporation::ActiveModel {
        corporation_id: ActiveValue::Set(corporation_id),
        name: ActiveValue::Set(name.to_string()),
        ticker: ActiveValue::Set(ticker.to_string()),
        alliance_id: ActiveValue::Set(alliance_id),
        member_count: ActiveValue::Set(Some(42)),
        version: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_alliance(
    db: &DatabaseConnection,
    alliance_id: i64,
    name: &str,
    ticker: &str,
) -> Result<entity::eve_alliance::Model, TestError> {
    let now = Utc::now().naive_utc();

    let model = entity::eve_alliance::ActiveModel {
        alliance_id: ActiveValue::Set(alliance_id),
        name: ActiveValue::Set(name.to_string()),
        ticker: ActiveValue::Set(ticker.to_string()),
        version: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_item_type(
    db: &DatabaseConnection,
    type_id: i64,
    name: &str,
) -> Result<entity::eve_item_type::Model, TestError> {
    let now = Utc::now().naive_utc();

    let model = entity::eve_item_type::ActiveModel {
        type_id: ActiveValue::Set(type_id),
        name: ActiveValue::Set(name.to_string()),
        group_id: ActiveValue::Set(Some(25)),
        version: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_solar_system(
    db: &DatabaseConnection,
    system_id: i64,
    name: &str,
    region_id: i64,
    region_name: &str,
    security_status: f64,
) -> Result<entity::eve_solar_system::Model, TestError> {
    let now = Utc::now().naive_utc();

    let model = entity::eve_solar_system::ActiveModel {
        system_id: ActiveValue::Set(system_id),
        name: ActiveValue::Set(name.to_string()),
        region_id: ActiveValue::Set(region_id),
        region_name: ActiveValue::Set(region_name.to_string()),
        security_status: ActiveValue::Set(security_status),
        version: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_price_snapshot(
    db: &DatabaseConnection,
    type_id: i64,
    region_id: i64,
    snapshot_date: NaiveDate,
    average: f64,
) -> Result<entity::price_snapshot::Model, TestError> {
    let model = entity::price_snapshot::ActiveModel {
        type_id: ActiveValue::Set(type_id),
        region_id: ActiveValue::Set(region_id),
        snapshot_date: ActiveValue::Set(snapshot_date),
        average: ActiveValue::Set(average),
        highest: ActiveValue::Set(average * 1.1),
        lowest: ActiveValue::Set(average * 0.9),
        order_count: ActiveValue::Set(100),
        volume: ActiveValue::Set(1000),
    };

    Ok(model.insert(db).await?)
}
