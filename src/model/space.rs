//! Space type classification.
//!
//! Regions are classified by fixed id ranges first (wormhole space, abyssal
//! space, Pochven), then by the solar system's security status.

use entity::sea_orm_active_enums::SpaceType;

/// Wormhole-space regions occupy this id range.
const WORMHOLE_REGION_MIN: i64 = 11_000_001;
const WORMHOLE_REGION_MAX: i64 = 11_000_033;

/// Abyssal deadspace regions occupy this id range.
const ABYSSAL_REGION_MIN: i64 = 12_000_000;
const ABYSSAL_REGION_MAX: i64 = 13_000_000;

/// The designated Pochven region.
const POCHVEN_REGION_ID: i64 = 10_000_070;

/// Classifies a location by region id and security status.
pub fn classify(region_id: i64, security_status: f64) -> SpaceType {
    if (WORMHOLE_REGION_MIN..=WORMHOLE_REGION_MAX).contains(&region_id) {
        SpaceType::WSpace
    } else if (ABYSSAL_REGION_MIN..ABYSSAL_REGION_MAX).contains(&region_id) {
        SpaceType::Abyssal
    } else if region_id == POCHVEN_REGION_ID {
        SpaceType::Pochven
    } else if security_status >= 0.45 {
        SpaceType::Highsec
    } else if security_status > 0.0 {
        SpaceType::Lowsec
    } else {
        SpaceType::Nullsec
    }
}
