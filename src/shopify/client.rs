//! Shopify Admin REST client
//!
//! [`ShopifyApi`] is the only seam between the gateway and the platform:
//! one authenticated GET that yields a JSON document. [`ShopifyClient`] is
//! the reqwest-backed implementation.

use std::fmt::Display;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, error};

use super::error::UpstreamError;
use crate::config::{ConfigError, ShopifyConfig};

/// `X-Shopify-Access-Token`
pub const ACCESS_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-shopify-access-token");

/// A GET against a resource relative to the store's API base
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamRequest {
    /// e.g. `orders.json`, `orders/42.json`
    pub resource: String,
    pub query: Vec<(String, String)>,
}

impl UpstreamRequest {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Restrict the response to the given fields (`fields=a,b,c`)
    pub fn fields(self, fields: &[&str]) -> Self {
        if fields.is_empty() {
            return self;
        }
        self.param("fields", fields.join(","))
    }

    /// Filter by a list of ids, joined into a single parameter
    pub fn ids<I: Display>(self, key: &str, ids: &[I]) -> Self {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.param(key, joined)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Read access to the Shopify Admin API
#[async_trait]
pub trait ShopifyApi: Send + Sync {
    /// GET a JSON resource. Non-2xx answers are `UpstreamError::Http`.
    async fn get_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}

/// reqwest-backed [`ShopifyApi`]
pub struct ShopifyClient {
    http: reqwest::Client,
    api_base: String,
}

impl ShopifyClient {
    /// Bad credentials are configuration errors, caught before any request
    pub fn new(config: &ShopifyConfig) -> Result<Self, ConfigError> {
        let mut token = HeaderValue::from_str(&config.access_token).map_err(|_| {
            ConfigError::Invalid(
                "shopify.access_token contains characters not allowed in a header".to_string(),
            )
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            api_base: api_base(config),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base, resource.trim_start_matches('/'))
    }
}

/// `https://{store}/admin/api/{version}` unless overridden
pub fn api_base(config: &ShopifyConfig) -> String {
    let base = match &config.api_base_url {
        Some(url) => url.clone(),
        None => format!(
            "https://{}/admin/api/{}",
            config.store_url, config.api_version
        ),
    };
    base.trim_end_matches('/').to_string()
}

#[async_trait]
impl ShopifyApi for ShopifyClient {
    async fn get_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        let url = self.url_for(&request.resource);
        debug!("[SHOPIFY] GET {} {:?}", url, request.query);

        let response = self
            .http
            .get(&url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| {
                error!("[SHOPIFY] Request to {} failed: {}", url, e);
                UpstreamError::transport(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let full_url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            error!("[SHOPIFY] HTTP error occurred: {}", status);
            error!("[SHOPIFY] URL: {}", full_url);
            error!("[SHOPIFY] Response content: {}", body);
            return Err(UpstreamError::http(
                status.as_u16(),
                format!("{} for url: {}", status, full_url),
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            error!("[SHOPIFY] Failed to parse response from {}: {}", url, e);
            UpstreamError::transport(format!("Failed to parse response: {}", e))
        })
    }
}
