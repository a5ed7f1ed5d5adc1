//! Shopify Admin API access
//!
//! - [`client`]: the `ShopifyApi` seam and its reqwest implementation
//! - [`orders`]: order list / single order reads
//! - [`inventory`]: inventory status lookup
//! - [`projector`]: pure order views

pub mod client;
pub mod error;
pub mod inventory;
#[cfg(feature = "mock-upstream")]
pub mod mock;
pub mod models;
pub mod orders;
pub mod projector;

pub use client::{ShopifyApi, ShopifyClient, UpstreamRequest};
pub use error::UpstreamError;
pub use inventory::{InventoryStatus, inventory_status};
#[cfg(feature = "mock-upstream")]
pub use mock::MockShopify;
pub use models::{InventoryLevel, LineItem, Order, OrderId};
pub use projector::{FulfillmentItem, FulfillmentPreview};
