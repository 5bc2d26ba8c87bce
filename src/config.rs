//! Backend connection settings

use crate::config_error;
use crate::error::{DomainScoutError, Result};
use reqwest::Client;
use std::time::Duration;

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "DOMAIN_SCOUT_API_URL";

/// Environment variable setting a request timeout, in seconds
pub const TIMEOUT_ENV: &str = "DOMAIN_SCOUT_TIMEOUT_SECS";

/// Connection settings shared by both backend clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves timing out to the transport
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("domain-scout/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            let base_url = base_url.trim();
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(config_error!("{} must be an http(s) URL, got '{}'", BASE_URL_ENV, base_url));
            }
            config.base_url = base_url.to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| config_error!("{} must be a whole number of seconds, got '{}'", TIMEOUT_ENV, raw))?;
            if secs == 0 {
                return Err(config_error!("{} must be greater than zero", TIMEOUT_ENV));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Build the HTTP client both backends share
    pub fn build_http_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| DomainScoutError::config(format!("Failed to build HTTP client: {}", e)))
    }
}
