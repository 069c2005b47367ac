//! Mock upstream endpoint creation.
//!
//! Each method registers a GET endpoint on the mockito server returning the
//! given JSON body and verifying it was called the expected number of times.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::eve::EveFixtures;

impl<'a> EveFixtures<'a> {
    fn create_endpoint(&mut self, path: &str, body: &Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_character_endpoint(
        &mut self,
        character_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/characters/{}/", character_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_corporation_endpoint(
        &mut self,
        corporation_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/corporations/{}/", corporation_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_alliance_endpoint(
        &mut self,
        alliance_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/alliances/{}/", alliance_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_item_type_endpoint(
        &mut self,
        type_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/types/{}/", type_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_solar_system_endpoint(
        &mut self,
        system_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/systems/{}/", system_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_constellation_endpoint(
        &mut self,
        constellation_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/constellations/{}/", constellation_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_region_endpoint(
        &mut self,
        region_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/regions/{}/", region_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    pub fn create_market_history_endpoint(
        &mut self,
        region_id: i64,
        type_id: i64,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/markets/{}/history/?type_id={}", region_id, type_id);
        self.create_endpoint(&path, body, expected_requests)
    }

    /// Registers an endpoint that always fails, for degradation tests.
    pub fn create_failing_endpoint(&mut self, path: &str) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(502)
            .create()
    }
}
