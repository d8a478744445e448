// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Matches the polling cadence of the web dashboard
fn default_refresh_interval_secs() -> u64 {
    30
}

/// Backend connection section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as the `X-API-Key` header on send requests
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Dashboard section
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl DashboardConfig {
    /// Polling interval, never shorter than one second
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Applies command-line overrides on top of the file configuration
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        api_key: Option<String>,
        refresh_interval_secs: Option<u64>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.server.base_url = base_url;
        }
        if let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.server.api_key = Some(api_key);
        }
        if let Some(secs) = refresh_interval_secs {
            self.dashboard.refresh_interval_secs = secs;
        }
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
