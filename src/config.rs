use serde::Deserialize;

use crate::env::{
    env_flag, env_or, SINK_ASYNC_ENV, SINK_ENV_ENV, SINK_MIN_LEVEL_ENV, SINK_SERVICE_NAME_ENV,
};
use crate::error::ConfigError;
use crate::level::Level;

/// Service name used when none is configured.
pub const DEFAULT_SERVICE: &str = "unknown";

/// Environment name used when none is configured.
pub const DEFAULT_ENV: &str = "development";

/// Logger configuration, captured once by [`Logger::new`](crate::Logger::new).
///
/// **Fields**
/// - `service`: logical service name stamped on every event.
/// - `env`: deployment environment stamped on every event.
/// - `min_level`: events below this level are dropped before they are built.
/// - `async_mode`: reserved. Dispatch is always synchronous and this flag does
///   not change it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: String,
    pub env: String,
    pub min_level: Level,
    #[serde(rename = "async")]
    pub async_mode: bool,
}

impl Config {
    pub fn new(service: impl Into<String>, env: impl Into<String>) -> Self {
        Config {
            service: service.into(),
            env: env.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    #[must_use]
    pub fn with_async_mode(mut self, async_mode: bool) -> Self {
        self.async_mode = async_mode;
        self
    }

    /// Build a config from `SINK_*` environment variables.
    ///
    /// Unset variables fall back to empty names (defaulted later by
    /// [`Config::normalized`]), `DEBUG` and synchronous mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let min_level = match std::env::var(SINK_MIN_LEVEL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => {
                raw.parse().map_err(|source| ConfigError::InvalidLevel {
                    var: SINK_MIN_LEVEL_ENV,
                    source,
                })?
            }
            _ => Level::default(),
        };

        Ok(Config {
            service: env_or(SINK_SERVICE_NAME_ENV, ""),
            env: env_or(SINK_ENV_ENV, ""),
            min_level,
            async_mode: env_flag(SINK_ASYNC_ENV),
        })
    }

    /// Replace empty service and environment names with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.service.is_empty() {
            self.service = DEFAULT_SERVICE.to_string();
        }
        if self.env.is_empty() {
            self.env = DEFAULT_ENV.to_string();
        }
        self
    }
}
