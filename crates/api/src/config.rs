//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `BOOKSHELF_HOST` - Bind address (default: 127.0.0.1)
//! - `BOOKSHELF_PORT` - Listen port (default: 3000)
//! - `VOLUMES_API_URL` - External volumes search endpoint
//!   (default: <https://www.googleapis.com/books/v1/volumes>)
//! - `VOLUMES_API_TIMEOUT_SECS` - Timeout for a single lookup call (default: 10)
//! - `RETRIEVAL_DELAY_MS` - Artificial delay for the deferred endpoints (default: 1000)
//! - `BOOKSHELF_LOG_JSON` - Emit JSON log lines instead of text (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default external volumes search endpoint.
pub const DEFAULT_VOLUMES_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RETRIEVAL_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// External volumes API configuration
    pub lookup: LookupConfig,
    /// Delay applied by the deferred retrieval endpoints
    pub retrieval_delay: Duration,
    /// Emit structured JSON logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// External volumes API configuration.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Volumes search endpoint
    pub base_url: Url,
    /// Upper bound for one round trip
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            lookup: LookupConfig::default(),
            retrieval_delay: Duration::from_millis(DEFAULT_RETRIEVAL_DELAY_MS),
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_VOLUMES_API_URL).expect("default volumes URL is valid"),
            timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env_or("BOOKSHELF_HOST", defaults.host)?;
        let port = parse_env_or("BOOKSHELF_PORT", defaults.port)?;
        let lookup = LookupConfig::from_env()?;
        let retrieval_delay = Duration::from_millis(parse_env_or(
            "RETRIEVAL_DELAY_MS",
            DEFAULT_RETRIEVAL_DELAY_MS,
        )?);
        let log_json = parse_env_or("BOOKSHELF_LOG_JSON", defaults.log_json)?;

        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;

        Ok(Self {
            host,
            port,
            lookup,
            retrieval_delay,
            log_json,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl LookupConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = get_optional_env("VOLUMES_API_URL")
            .map_or(Ok(defaults.base_url), |raw| parse_url("VOLUMES_API_URL", &raw))?;

        let timeout_secs = validate_timeout(
            "VOLUMES_API_TIMEOUT_SECS",
            parse_env_or("VOLUMES_API_TIMEOUT_SECS", DEFAULT_LOOKUP_TIMEOUT_SECS)?,
        )?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Lookup timeouts must be positive.
fn validate_timeout(key: &str, secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(secs)
}

/// Parse a sample rate, which must lie in `0.0..=1.0`.
fn parse_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let rate = parse_env_or(key, default)?;
    validate_rate(key, rate)
}

fn validate_rate(key: &str, rate: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("sample rate must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}
