//! Killmail payload builder.
//!
//! Produces the JSON accepted at the ingest boundary, so a test exercises the
//! same deserialization path production traffic does.

use serde_json::{json, Value};

pub const DEFAULT_KILLMAIL_TIME: &str = "2026-01-10T12:00:00Z";
pub const DEFAULT_SYSTEM_ID: i64 = 30_000_142;
pub const DEFAULT_SHIP_TYPE_ID: i64 = 587;

pub struct KillmailBuilder {
    killmail_id: i64,
    hash: String,
    killmail_time: String,
    solar_system_id: i64,
    victim: Value,
    attackers: Vec<Value>,
    items: Vec<Value>,
}

impl KillmailBuilder {
    pub fn new(killmail_id: i64) -> Self {
        Self {
            killmail_id,
            hash: format!("hash-{}", killmail_id),
            killmail_time: DEFAULT_KILLMAIL_TIME.to_string(),
            solar_system_id: DEFAULT_SYSTEM_ID,
            victim: json!({
                "character_id": 90_000_001i64,
                "corporation_id": 98_000_001i64,
                "alliance_id": null,
                "ship_type_id": DEFAULT_SHIP_TYPE_ID,
                "damage_taken": 1500,
            }),
            attackers: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn hash(mut self, hash: &str) -> Self {
        self.hash = hash.to_string();
        self
    }

    pub fn time(mut self, killmail_time: &str) -> Self {
        self.killmail_time = killmail_time.to_string();
        self
    }

    pub fn solar_system(mut self, solar_system_id: i64) -> Self {
        self.solar_system_id = solar_system_id;
        self
    }

    pub fn victim(
        mut self,
        character_id: Option<i64>,
        corporation_id: Option<i64>,
        alliance_id: Option<i64>,
        ship_type_id: i64,
    ) -> Self {
        self.victim = json!({
            "character_id": character_id,
            "corporation_id": corporation_id,
            "alliance_id": alliance_id,
            "ship_type_id": ship_type_id,
            "damage_taken": 1500,
        });
        self
    }

    pub fn attacker(mut self, character_id: Option<i64>, corporation_id: Option<i64>) -> Self {
        self.attackers.push(json!({
            "character_id": character_id,
            "corporation_id": corporation_id,
            "alliance_id": null,
            "ship_type_id": 621,
            "weapon_type_id": 2873,
            "damage_done": 500,
            "final_blow": false,
            "security_status": 0.5,
        }));
        self
    }

    pub fn final_blow_attacker(
        mut self,
        character_id: Option<i64>,
        corporation_id: Option<i64>,
    ) -> Self {
        self.attackers.push(json!({
            "character_id": character_id,
            "corporation_id": corporation_id,
            "alliance_id": null,
            "ship_type_id": 621,
            "weapon_type_id": 2873,
            "damage_done": 1000,
            "final_blow": true,
            "security_status": 0.5,
        }));
        self
    }

    pub fn item(mut self, item_type_id: i64, flag: i32, dropped: i64, destroyed: i64) -> Self {
        self.items.push(json!({
            "item_type_id": item_type_id,
            "flag": flag,
            "quantity_dropped": dropped,
            "quantity_destroyed": destroyed,
            "singleton": false,
        }));
        self
    }

    /// Adds a container item holding the given contents.
    pub fn container(mut self, item_type_id: i64, flag: i32, contents: Vec<Value>) -> Self {
        self.items.push(json!({
            "item_type_id": item_type_id,
            "flag": flag,
            "quantity_dropped": 1,
            "quantity_destroyed": 0,
            "singleton": true,
            "items": contents,
        }));
        self
    }

    pub fn build(self) -> Value {
        let mut victim = self.victim;
        victim["items"] = Value::Array(self.items);

        json!({
            "killmail_id": self.killmail_id,
            "hash": self.hash,
            "killmail_time": self.killmail_time,
            "solar_system_id": self.solar_system_id,
            "victim": victim,
            "attackers": self.attackers,
        })
    }
}

/// Content entry for [`KillmailBuilder::container`].
pub fn content_item(item_type_id: i64, dropped: i64, destroyed: i64) -> Value {
    json!({
        "item_type_id": item_type_id,
        "flag": 5,
        "quantity_dropped": dropped,
        "quantity_destroyed": destroyed,
        "singleton": false,
    })
}
