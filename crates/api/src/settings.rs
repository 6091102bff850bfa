//! Server Settings

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime settings, loadable from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Socket address to bind
    pub bind_addr: String,
    /// Span of the history window served and forecast from (hours)
    pub history_hours: usize,
    /// Sample retention cap for the in-memory store
    pub max_sample_records: usize,
    /// Alert retention cap for the in-memory store
    pub max_alert_records: usize,
    /// Rate limit replenish interval (seconds per request)
    pub rate_limit_per_second: u64,
    /// Rate limit burst size
    pub rate_limit_burst: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            history_hours: 168,
            max_sample_records: 10_000,
            max_alert_records: 1_000,
            rate_limit_per_second: 2,
            rate_limit_burst: 5,
        }
    }
}

impl Settings {
    /// Load settings from defaults overridden by `AIRWATCH_*` env vars
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("history_hours", 168i64)?
            .set_default("max_sample_records", 10_000i64)?
            .set_default("max_alert_records", 1_000i64)?
            .set_default("rate_limit_per_second", 2i64)?
            .set_default("rate_limit_burst", 5i64)?
            .add_source(Environment::with_prefix("AIRWATCH"))
            .build()?
            .try_deserialize()
    }
}
