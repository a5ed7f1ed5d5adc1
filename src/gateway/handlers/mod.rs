//! HTTP handlers
//!
//! - [`index`]: landing page
//! - [`orders`]: order list and single order
//! - [`fulfillment`]: mock ShipBob fulfillment preview

pub mod fulfillment;
pub mod index;
pub mod orders;

pub use fulfillment::mock_shipbob_order;
pub use index::index;
pub use orders::{get_order, get_orders};
