use killfeed_test_utils::prelude::*;

use crate::data::eve::{SolarSystemRecord, SolarSystemRepository};


fn system(name: &str, region_id: i64, security_status: f64) -> SolarSystemRecord {
    SolarSystemRecord {
        name: name.to_string(),
        region_id,
        region_name: "The Forge".to_string(),
        security_status,
    }
}
