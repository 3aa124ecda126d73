use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),
}

/// Connection settings for [`ApiClient`](crate::core::http::ApiClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request path is resolved against; must end with `/`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as a bearer token when present
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.mollie.com/v2/".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("mollie-chargebacks/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Default config file location: `<config dir>/mollie-chargebacks/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~").join(".config"))
            .join("mollie-chargebacks")
            .join("config.toml")
    }

    /// Load config from the default path, falling back to defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        match url::Url::parse(&self.base_url) {
            Ok(url) => {
                if !["http", "https"].contains(&url.scheme()) {
                    issues.push(format!(
                        "Invalid base_url scheme: '{}' (must be 'http' or 'https')",
                        url.scheme()
                    ));
                }
                if !self.base_url.ends_with('/') {
                    issues.push(format!(
                        "base_url must have a trailing slash, got: '{}'",
                        self.base_url
                    ));
                }
            }
            Err(e) => issues.push(format!("Invalid base_url '{}': {}", self.base_url, e)),
        }
        if self.timeout_secs == 0 {
            issues.push("timeout_secs must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            issues.push("user_agent must not be empty".to_string());
        }
        if matches!(self.api_token.as_deref(), Some("")) {
            issues.push("api_token is set but empty".to_string());
        }
        issues
    }
}
