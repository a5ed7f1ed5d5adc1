//! Scripted in-memory [`ShopifyApi`]
//!
//! Responses are keyed by resource path. Every request is recorded so
//! tests can assert on call counts and query parameters.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::client::{ShopifyApi, UpstreamRequest};
use super::error::UpstreamError;

#[derive(Default)]
pub struct MockShopify {
    responses: HashMap<String, Result<Value, UpstreamError>>,
    calls: Mutex<Vec<UpstreamRequest>>,
}

impl MockShopify {
    pub fn new() -> Self {
        Default::default()
    }

    /// Answer `resource` with `body`
    pub fn with_response(mut self, resource: &str, body: Value) -> Self {
        self.responses.insert(resource.to_string(), Ok(body));
        self
    }

    /// Fail `resource` with `err`
    pub fn with_error(mut self, resource: &str, err: UpstreamError) -> Self {
        self.responses.insert(resource.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<UpstreamRequest> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn calls_to(&self, resource: &str) -> usize {
        self.calls()
            .iter()
            .filter(|req| req.resource == resource)
            .count()
    }
}

#[async_trait]
impl ShopifyApi for MockShopify {
    async fn get_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        match self.responses.get(&request.resource) {
            Some(scripted) => scripted.clone(),
            None => Err(UpstreamError::http(
                404,
                format!("404 Not Found for url: mock://{}", request.resource),
            )),
        }
    }
}
