use std::sync::Arc;

use crate::config::DEFAULT_SAMPLE_ORDER_ID;
use crate::shopify::ShopifyApi;

/// Gateway application state (shared, read-only)
#[derive(Clone)]
pub struct AppState {
    /// Upstream Shopify Admin API
    pub shopify: Arc<dyn ShopifyApi>,
    /// Order linked from the index page
    pub sample_order_id: u64,
}

impl AppState {
    pub fn new(shopify: Arc<dyn ShopifyApi>) -> Self {
        Self {
            shopify,
            sample_order_id: DEFAULT_SAMPLE_ORDER_ID,
        }
    }

    pub fn with_sample_order_id(mut self, order_id: u64) -> Self {
        self.sample_order_id = order_id;
        self
    }
}
