//! Application configuration loaded from environment variables.
//!
//! Required values are the LWA credentials, the skill ID and the deploy
//! directory charts are written to. Everything else has a default.

use crate::models::{Credentials, MetricName};
use crate::time_utils::ClockMode;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default LWA token endpoint.
pub const DEFAULT_LWA_TOKEN_URL: &str = "https://api.amazon.com/auth/o2/token";
/// Default SMAPI host.
pub const DEFAULT_SMAPI_BASE_URL: &str = "https://api.amazonalexa.com";
/// Client-wide HTTP timeout when `HTTP_TIMEOUT_SECS` is unset.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(200);

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Required ---
    /// LWA OAuth client credentials
    pub credentials: Credentials,
    /// Skill whose metrics are queried
    pub skill_id: String,
    /// Directory for chart PNGs
    pub deploy_dir: PathBuf,

    // --- Optional ---
    /// Render a chart per metric; `SKIP_CHARTS=true` turns this off
    pub render_charts: bool,
    /// Metrics to fetch, deduplicated, in request order
    pub metrics: Vec<MetricName>,
    /// LWA token endpoint
    pub lwa_token_url: String,
    /// SMAPI base URL (scheme + host)
    pub smapi_base_url: String,
    /// Client-wide HTTP timeout
    pub http_timeout: Duration,
    /// Clock used for the query window
    pub clock: ClockMode,
    /// Print the full access token instead of a masked prefix
    pub print_access_token: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty and whitespace-only values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |var: &'static str, description: &'static str| {
            get(var).ok_or(ConfigError::Missing { var, description })
        };

        // Checked in this order so the first message matches the first gap.
        let client_id = require("lwa_client_id", "LWA Client ID")?;
        let client_secret = require("lwa_client_secret", "LWA Client secret")?;
        let refresh_token = require("lwa_refresh_token", "LWA refresh token")?;
        let skill_id = require("custom_skill_id", "Skill ID")?;
        let deploy_dir = PathBuf::from(require("BITRISE_DEPLOY_DIR", "Deploy directory")?);

        let metrics = match get("SKILL_METRICS") {
            Some(list) => parse_metric_list(&list)?,
            None => vec![MetricName::UniqueCustomers],
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "HTTP_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got '{}'", raw),
                    })
                }
            },
            None => DEFAULT_HTTP_TIMEOUT,
        };

        let clock = match get("METRICS_CLOCK") {
            Some(raw) => raw.parse::<ClockMode>().map_err(|reason| ConfigError::Invalid {
                var: "METRICS_CLOCK",
                reason,
            })?,
            None => ClockMode::default(),
        };

        let print_access_token = flag(&get, "PRINT_ACCESS_TOKEN")?;
        let render_charts = !flag(&get, "SKIP_CHARTS")?;

        Ok(Self {
            credentials: Credentials {
                client_id,
                client_secret,
                refresh_token,
            },
            skill_id,
            deploy_dir,
            render_charts,
            metrics,
            lwa_token_url: get("LWA_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_LWA_TOKEN_URL.to_string()),
            smapi_base_url: get("SMAPI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SMAPI_BASE_URL.to_string()),
            http_timeout,
            clock,
            print_access_token,
        })
    }
}

/// Parse a comma-separated metric list, or `all`.
///
/// Duplicates are dropped, keeping the first occurrence.
fn parse_metric_list(raw: &str) -> Result<Vec<MetricName>, ConfigError> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(MetricName::ALL.to_vec());
    }

    let mut metrics = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let metric: MetricName = name.parse().map_err(|e| ConfigError::Invalid {
            var: "SKILL_METRICS",
            reason: format!("{}", e),
        })?;
        if !metrics.contains(&metric) {
            metrics.push(metric);
        }
    }

    if metrics.is_empty() {
        return Err(ConfigError::Invalid {
            var: "SKILL_METRICS",
            reason: "no metric names given".to_string(),
        });
    }
    Ok(metrics)
}

/// Optional boolean variable, false when unset.
fn flag<G>(get: &G, var: &'static str) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
            var,
            reason: format!("expected true or false, got '{}'", raw),
        }),
        None => Ok(false),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{description} is required (set {var})")]
    Missing {
        var: &'static str,
        description: &'static str,
    },

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
