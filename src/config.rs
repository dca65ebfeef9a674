use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

/// Simulated operation delays in milliseconds. These only exist so the front
/// end has something to show a progress message for; tests run with zeroes.
#[derive(Debug, Deserialize, Clone)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub add_ms: u64,
    pub toggle_ms: u64,
    pub delete_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            add_ms: 500,
            toggle_ms: 200,
            delete_ms: 300,
        }
    }
}

impl LatencyConfig {
    /// All delays disabled; what the test suite runs with.
    pub fn zero() -> Self {
        Self {
            login_ms: 0,
            add_ms: 0,
            toggle_ms: 0,
            delete_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn add(&self) -> Duration {
        Duration::from_millis(self.add_ms)
    }

    pub fn toggle(&self) -> Duration {
        Duration::from_millis(self.toggle_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("TASKDASH"))
            .build()?;

        config.try_deserialize()
    }
}
