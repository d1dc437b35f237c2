//! Endpoint configuration

use revisor_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the remote analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl EndpointConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("REVISOR_ENDPOINT_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("REVISOR_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(Error::Configuration(
                        "REVISOR_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Ok(secs) => secs,
                Err(_) => {
                    return Err(Error::Configuration(format!(
                        "REVISOR_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    )));
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self { base_url, timeout_secs };
        config.analyze_url()?;
        Ok(config)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of the analyze route, relative to the base URL
    pub fn analyze_url(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url).map_err(|e| {
            Error::Configuration(format!("invalid endpoint URL '{}': {}", self.base_url, e))
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("analyze")
            .map_err(|e| Error::Configuration(format!("invalid endpoint URL '{}': {}", self.base_url, e)))
    }
}
