//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so settings are
//! baked in when the crate is compiled:
//!
//! - `ARCHIVE_API_URL`: API base URL (default `http://localhost:8000/api`)
//! - `ARCHIVE_LOG_LEVEL`: console log level (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::net::api::ApiClient;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// How often a signed-in session is re-validated against the server.
pub const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(14 * 60);

/// Settings shared by the whole client, provided through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub session_check_interval: Duration,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            session_check_interval: SESSION_CHECK_INTERVAL,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Configuration from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ARCHIVE_API_URL"), option_env!("ARCHIVE_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map_or(defaults.api_base_url, |u| u.trim_end_matches('/').to_owned()),
            log_level: log_level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }

    /// API client for this configuration, authenticated with `token`.
    pub fn api(&self, token: Option<String>) -> ApiClient {
        ApiClient::new(self.api_base_url.clone()).with_token(token)
    }
}
