//! Application configuration loaded once at startup.

use std::time::Duration;

use crate::error::config::ConfigError;

/// Reference market region used for all price lookups (The Forge).
pub const REFERENCE_REGION_ID: i64 = 10_000_002;

/// Runtime configuration, read from the environment once at startup.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Base URL of the ESI-compatible game data service.
    pub esi_base_url: String,
    /// User agent sent with every external request.
    pub user_agent: String,
    /// Upper bound on any single external entity or price fetch.
    pub resolve_timeout: Duration,
    /// Killmails older than this are pruned by the retention job.
    pub retention_days: i64,
    /// Followed-entity filter applied to the frontpage feed.
    pub filter: FilterConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `USER_AGENT` are required; everything else has a
    /// default. Followed-entity lists are parsed here, once, into
    /// [`FilterConfig`] rather than read from the environment at call sites.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            esi_base_url: std::env::var("ESI_BASE_URL")
                .unwrap_or_else(|_| "https://esi.evetech.net/latest".to_string()),
            user_agent: require_var("USER_AGENT")?,
            resolve_timeout: Duration::from_millis(parse_var("RESOLVE_TIMEOUT_MS", 5_000)?),
            retention_days: parse_var("RETENTION_DAYS", 90)?,
            filter: FilterConfig {
                corporation_ids: parse_id_list("FOLLOWED_CORPORATION_IDS")?,
                alliance_ids: parse_id_list("FOLLOWED_ALLIANCE_IDS")?,
            },
        })
    }
}

/// Followed-entity id lists used to filter the frontpage feed.
///
/// Constructed once from the environment and passed by reference into the
/// query facade; an empty filter matches every killmail.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Corporations whose kills and losses are followed.
    pub corporation_ids: Vec<i64>,
    /// Alliances whose kills and losses are followed.
    pub alliance_ids: Vec<i64>,
}

impl FilterConfig {
    /// Returns true when no followed entities are configured.
    pub fn is_empty(&self) -> bool {
        self.corporation_ids.is_empty() && self.alliance_ids.is_empty()
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_id_list(name: &str) -> Result<Vec<i64>, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse().map_err(|_| ConfigError::InvalidVar {
                name: name.to_string(),
                value: value.clone(),
            })
        })
        .collect()
}
