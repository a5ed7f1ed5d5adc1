use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const ENV_STORE_URL: &str = "SHOPIFY_STORE_URL";
pub const ENV_API_VERSION: &str = "SHOPIFY_API_VERSION";
pub const ENV_ACCESS_TOKEN: &str = "SHOPIFY_ACCESS_TOKEN";

pub const DEFAULT_SAMPLE_ORDER_ID: u64 = 5676247515386;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    pub shopify: ShopifyConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Order linked from the index page
    #[serde(default = "default_sample_order_id")]
    pub sample_order_id: u64,
}

fn default_sample_order_id() -> u64 {
    DEFAULT_SAMPLE_ORDER_ID
}

/// Store credentials. Read-only for the life of the process.
#[derive(Clone, Serialize, Deserialize)]
pub struct ShopifyConfig {
    /// e.g. `my-store.myshopify.com`
    pub store_url: String,
    /// e.g. `2024-01`
    pub api_version: String,
    #[serde(default)]
    pub access_token: String,
    /// Replaces `https://{store_url}/admin/api/{api_version}` when set
    #[serde(default)]
    pub api_base_url: Option<String>,
}

// Keep the token out of logs
impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store_url", &self.store_url)
            .field("api_version", &self.api_version)
            .field("access_token", &"***")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl ShopifyConfig {
    /// Apply `SHOPIFY_*` overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_STORE_URL) {
            self.store_url = v;
        }
        if let Some(v) = lookup(ENV_API_VERSION) {
            self.api_version = v;
        }
        if let Some(v) = lookup(ENV_ACCESS_TOKEN) {
            self.access_token = v;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.is_none() && self.store_url.trim().is_empty() {
            return Err(ConfigError::Invalid("shopify.store_url is empty".to_string()));
        }
        if self.api_base_url.is_none() && self.api_version.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "shopify.api_version is empty".to_string(),
            ));
        }
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "shopify.access_token is empty (set it in the config file or {})",
                ENV_ACCESS_TOKEN
            )));
        }
        if reqwest::header::HeaderValue::from_str(&self.access_token).is_err() {
            return Err(ConfigError::Invalid(
                "shopify.access_token contains characters not allowed in a header".to_string(),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        Self::from_file(&format!("config/{}.yaml", env))
    }

    /// Load from an explicit path, apply environment overrides and validate
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut config = Self::from_yaml(&content)?;
        config.shopify.apply_env(|key| std::env::var(key).ok());
        config.shopify.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
