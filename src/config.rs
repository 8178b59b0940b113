use std::env;
use std::time::Duration;

use crate::http_retry::{DEFAULT_BACKOFF_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS, RetryConfig};

const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 600;

/// One Statnet deployment (SHL or SDHL)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatnetConfig {
    pub api_url: String,
    pub season_uuid: String,
    pub series_uuid: String,
    pub game_type_uuid: String,
}

/// CHL API location and season
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChlConfig {
    pub api_url: String,
    pub season_id: String,
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub is_dev: bool,
    pub shl: StatnetConfig,
    pub sdhl: StatnetConfig,
    pub chl: ChlConfig,
    /// Logo URL template for Statnet teams, `{id}` is the team uuid
    pub statnet_logo_url_template: String,
    /// Logo URL template for CHL teams, `{id}` is the team externalId
    pub chl_logo_url_template: String,
    /// Default cache TTL in seconds (default: 3600)
    pub cache_ttl_secs: u64,
    /// Expired-entry sweep interval in seconds (default: 600)
    pub cache_sweep_interval_secs: u64,
    /// Per-attempt upstream timeout in seconds (default: 10)
    pub upstream_timeout_secs: u64,
    /// Upstream attempts per fetch (default: 2)
    pub upstream_max_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables
    /// In DEV mode, provides sensible defaults. In PROD mode, port and seasons are required.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let is_dev = env::var("DEV_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        // Port: required in prod, defaults to 3000 in dev
        let port = if is_dev {
            env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?
        } else {
            env::var("PORT")
                .map_err(|_| "PORT is required in production")?
                .parse()?
        };

        let shl = statnet_from_env("SHL", "https://www.shl.se/api", is_dev)?;
        let sdhl = statnet_from_env("SDHL", "https://www.sdhl.se/api", is_dev)?;

        let chl = ChlConfig {
            api_url: env::var("CHL_API_URL")
                .unwrap_or_else(|_| "https://www.chl.hockey/api".to_string()),
            season_id: required("CHL_SEASON_ID", "dev-season", is_dev)?,
        };

        let statnet_logo_url_template = env::var("STATNET_LOGO_URL_TEMPLATE").unwrap_or_else(|_| {
            "https://sportality.cdn.s8y.se/team-logos/{id}_light.svg".to_string()
        });
        let chl_logo_url_template = env::var("CHL_LOGO_URL_TEMPLATE")
            .unwrap_or_else(|_| "https://www.chl.hockey/static/img/teams/{id}.png".to_string());

        Ok(Config {
            port,
            is_dev,
            shl,
            sdhl,
            chl,
            statnet_logo_url_template,
            chl_logo_url_template,
            cache_ttl_secs: numeric("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS),
            cache_sweep_interval_secs: numeric(
                "CACHE_SWEEP_INTERVAL_SECS",
                DEFAULT_SWEEP_INTERVAL_SECS,
            ),
            upstream_timeout_secs: numeric("UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            upstream_max_attempts: numeric("UPSTREAM_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
        })
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_interval_secs.max(1))
    }

    /// Retry policy for every upstream fetch
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.upstream_max_attempts,
            backoff: Duration::from_millis(DEFAULT_BACKOFF_MS),
            timeout: Some(Duration::from_secs(self.upstream_timeout_secs)),
        }
    }
}

fn statnet_from_env(
    prefix: &str,
    default_url: &str,
    is_dev: bool,
) -> Result<StatnetConfig, Box<dyn std::error::Error>> {
    let var = |name: &str| format!("{prefix}_{name}");

    Ok(StatnetConfig {
        api_url: env::var(var("API_URL")).unwrap_or_else(|_| default_url.to_string()),
        season_uuid: required(&var("SEASON_UUID"), "dev-season", is_dev)?,
        series_uuid: env::var(var("SERIES_UUID")).unwrap_or_default(),
        game_type_uuid: env::var(var("GAME_TYPE_UUID")).unwrap_or_default(),
    })
}

/// Required in prod, falls back to `dev_default` in dev
fn required(
    name: &str,
    dev_default: &str,
    is_dev: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(_) if is_dev => Ok(dev_default.to_string()),
        Err(_) => Err(format!("{name} is required in production").into()),
    }
}

/// Unparseable values fall back to the default
fn numeric<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
