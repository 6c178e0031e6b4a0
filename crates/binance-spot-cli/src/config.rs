/*
[INPUT]:  YAML configuration file, CLI/env overrides
[OUTPUT]: Resolved credentials and client settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use anyhow::Context;
use binance_spot_adapter::{BinanceClient, ClientConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the query tool
#[derive(Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key sent as `X-MBX-APIKEY` on account endpoints
    #[serde(default)]
    pub api_key: String,
    /// API secret used to sign account requests
    #[serde(default)]
    pub api_secret: String,
    /// REST base URL (production, testnet or a local mock)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("api_key", &redacted(&self.api_key))
            .field("api_secret", &redacted(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}

fn default_base_url() -> String {
    binance_spot_adapter::http::BINANCE_BASE_URL.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Replace file values with any flag or environment value that is set
    pub fn with_overrides(
        mut self,
        api_key: Option<String>,
        api_secret: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        if let Some(api_key) = api_key {
            self.api_key = api_key;
        }
        if let Some(api_secret) = api_secret {
            self.api_secret = api_secret;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: None,
        }
    }

    pub fn build_client(&self) -> anyhow::Result<BinanceClient> {
        BinanceClient::with_config_and_base_url(
            self.api_key.clone(),
            self.api_secret.clone(),
            self.client_config(),
            &self.base_url,
        )
        .with_context(|| format!("create client for {}", self.base_url))
    }
}
