//! Server configuration read from the environment.

use thiserror::Error;

/// Enables debug-level logging when `1` or `true`.
pub const DEBUG_VAR: &str = "QUEUE_UI_DEBUG";
/// Comma-separated queue names created at start-up.
pub const SEED_QUEUES_VAR: &str = "QUEUE_UI_SEED_QUEUES";

const DEFAULT_SEED_QUEUE: &str = "default";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be one of 1, 0, true, false (got '{value}')")]
    InvalidBool { var: &'static str, value: String },
}

/// Settings for the server side of the queue monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Log at debug level.
    pub debug: bool,
    /// Queues created when the supervisor starts.
    pub seed_queues: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            seed_queues: vec![DEFAULT_SEED_QUEUE.to_string()],
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment, loading a `.env`
    /// file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is normal; the environment alone is enough.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEBUG_VAR) {
            config.debug = parse_bool(DEBUG_VAR, &value)?;
        }

        if let Some(value) = lookup(SEED_QUEUES_VAR) {
            config.seed_queues = value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    /// Default log filter directive for this configuration.
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
