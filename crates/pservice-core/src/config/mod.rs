use std::time::Duration;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_MAX_POINTS: usize = 100_000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub enumeration: EnumerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds a request may take before it is answered with 503.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the per-request timeout.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the timeout is zero.
    pub fn request_timeout(&self) -> CoreResult<Duration> {
        if self.request_timeout_secs == 0 {
            return Err(CoreError::ConfigError(
                "server.request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(Duration::from_secs(self.request_timeout_secs))
    }

    /// ## Summary
    /// Replaces host and port with an `addr:port` command line argument.
    ///
    /// The port must be four or five digits. An empty host (":8282") keeps
    /// the configured host.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if the argument is not of the form `addr:port`.
    pub fn override_bind_addr(&mut self, arg: &str) -> CoreResult<()> {
        let invalid = || CoreError::InvalidInput(format!("{arg} must have the form addr:port"));

        let (host, port) = arg.rsplit_once(':').ok_or_else(invalid)?;
        if !(4..=5).contains(&port.len()) || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        self.port = port.parse().map_err(|_e| invalid())?;

        if !host.is_empty() {
            self.host = host.to_string();
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumerationConfig {
    /// Upper bound on the number of timestamps a single request may produce.
    pub max_points: usize,
    /// IANA zone used when a request carries no `tz`; the system zone otherwise.
    pub default_timezone: Option<String>,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            default_timezone: None,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables are prefixed with `PSERVICE_` and use `__` between
    /// section and key, e.g. `PSERVICE_SERVER__PORT`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "localhost")?
            .set_default("server.port", 8282)?
            .set_default("server.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("logging.level", "debug")?
            .set_default(
                "enumeration.max_points",
                i64::try_from(DEFAULT_MAX_POINTS)?,
            )?
            // Env file
            .add_source(
                config::Environment::with_prefix("PSERVICE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
