pub const TEST_USER_AGENT: &str = "killfeed-tests/0.1.0";

/// Region id used for price snapshots in tests; matches the engine's
/// reference region (The Forge).
pub const TEST_REGION_ID: i64 = 10_000_002;
