/*
[INPUT]:  YAML configuration file and P2PB2B_* environment variables
[OUTPUT]: Parsed CLI configuration, client config and credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, Result, bail};
use p2pb2b_adapter::{ClientConfig, Credentials, P2pb2bClient};
use serde::{Deserialize, Serialize};

pub const ENV_API_KEY: &str = "P2PB2B_API_KEY";
pub const ENV_API_SECRET: &str = "P2PB2B_API_SECRET";

/// Top-level configuration for the command line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Exchange host, without the `/api/v1` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Public API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Secret API key
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            api_key: None,
            api_secret: None,
        }
    }
}

fn default_base_url() -> String {
    ClientConfig::default().base_url
}

fn default_timeout_secs() -> u64 {
    ClientConfig::default().timeout.as_secs()
}

fn default_connect_timeout_secs() -> u64 {
    ClientConfig::default().connect_timeout.as_secs()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty file deserializes to unit; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Override credentials from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Override credentials from any variable lookup
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(secret) = lookup(ENV_API_SECRET).filter(|v| !v.is_empty()) {
            self.api_secret = Some(secret);
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            base_url: self.base_url.clone(),
        }
    }

    /// Credentials for the client
    ///
    /// Public commands never send the keys, so blanks are used when
    /// `require` is false and nothing is configured.
    pub fn credentials(&self, require: bool) -> Result<Credentials> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Ok(Credentials::new(key.clone(), secret)),
            _ if require => bail!(
                "api_key and api_secret are required (config file or {ENV_API_KEY}/{ENV_API_SECRET})"
            ),
            _ => Ok(Credentials::new("", "")),
        }
    }

    pub fn build_client(&self, require_credentials: bool) -> Result<P2pb2bClient> {
        let credentials = self.credentials(require_credentials)?;
        P2pb2bClient::with_config(self.client_config(), credentials).context("build p2pb2b client")
    }
}
