//! Environment variable names read by [`Config::from_env`](crate::Config::from_env).
//!
//! These are purely helpers; the logger itself never reads the environment.

/// Logical service name stamped on every event.
pub const SINK_SERVICE_NAME_ENV: &str = "SINK_SERVICE_NAME";

/// Deployment environment, e.g. `production`.
pub const SINK_ENV_ENV: &str = "SINK_ENV";

/// Minimum level, one of `debug`, `info`, `warn`, `error`.
pub const SINK_MIN_LEVEL_ENV: &str = "SINK_MIN_LEVEL";

/// Reserved async switch (`1`, `true`, `yes`, `on`).
pub const SINK_ASYNC_ENV: &str = "SINK_ASYNC";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a boolean switch; unset or unrecognized values are `false`.
pub fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
