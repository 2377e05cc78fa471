//! Client settings: built-in defaults, then `portal.toml`, then `APP__*`
//! environment variables.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "portal";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub feedback_hide_secs: u64,
    /// Periodic directory refresh used by long-running front ends.
    pub refresh_interval_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            request_timeout_secs: 30,
            feedback_hide_secs: 5,
            refresh_interval_secs: None,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn feedback_hide_after(&self) -> Duration {
        Duration::from_secs(self.feedback_hide_secs)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        if let Some(server_url) = server_url {
            self.server_url = server_url;
        }
        self
    }
}

pub fn load_settings() -> Result<ClientSettings, ConfigError> {
    Config::builder()
        .add_source(File::with_name(SETTINGS_FILE).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

pub fn parse_settings(raw_toml: &str) -> Result<ClientSettings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(raw_toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
