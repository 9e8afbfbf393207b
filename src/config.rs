//! Client Configuration
//!
//! Server address and polling cadence, fixed at build time and injected at startup.

use std::time::Duration;

const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
const DEFAULT_HEALTH_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bare server root, pinged for liveness
    pub server_root: String,
    /// Prefix for the actions resource (`{server_root}/api`)
    pub api_base: String,
    pub health_interval: Duration,
}

impl ClientConfig {
    /// Read `ACTIONS_SERVER_URL` and `ACTIONS_HEALTH_INTERVAL_MS` as set when the bundle was built
    pub fn from_env() -> Self {
        Self::from_parts(
            option_env!("ACTIONS_SERVER_URL"),
            option_env!("ACTIONS_HEALTH_INTERVAL_MS"),
        )
    }

    fn from_parts(server_url: Option<&str>, interval_ms: Option<&str>) -> Self {
        let server_root = server_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SERVER_URL)
            .trim_end_matches('/')
            .to_string();

        let interval_ms = interval_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_HEALTH_INTERVAL_MS);

        Self {
            api_base: format!("{server_root}/api"),
            server_root,
            health_interval: Duration::from_millis(interval_ms),
        }
    }

    /// `{server_root}/`
    pub fn health_url(&self) -> String {
        format!("{}/", self.server_root)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}
