//! Shopify Bridge - read-only HTTP views over the Shopify Admin API
//!
//! # Modules
//!
//! - [`config`] - YAML configuration with `SHOPIFY_*` environment overrides
//! - [`logging`] - tracing subscriber setup (stdout + rolling file)
//! - [`shopify`] - upstream client, order reads, inventory lookup, projections
//! - [`gateway`] - axum router, handlers and error mapping

pub mod config;
pub mod gateway;
pub mod logging;
pub mod shopify;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError, ShopifyConfig};
pub use gateway::{AppState, router, run_server};
pub use shopify::{ShopifyApi, ShopifyClient, UpstreamError, UpstreamRequest};
