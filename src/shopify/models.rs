//! Shopify Admin REST payloads
//!
//! Only the fields this service reads are modelled. Everything the
//! platform may omit is optional, so a sparse `fields=` selection still
//! decodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type OrderId = u64;
pub type ProductId = u64;
pub type InventoryItemId = u64;
pub type LocationId = u64;
pub type AvailableQty = i64;

/// Order as returned by `orders.json` / `orders/{id}.json`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub name: Option<String>,
    /// Decimal kept as the upstream string, e.g. "19.99"
    #[serde(default)]
    pub total_price: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Opaque to this service; passed through as-is
    #[serde(default)]
    pub shipping_address: Option<Value>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LineItem {
    /// Custom (non-catalog) items have no product
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub inventory_item_id: Option<InventoryItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
}

/// `{"orders": [...]}`
#[derive(Debug, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// `{"order": {...}}`
///
/// The order is kept raw so an absent, `null` or `{}` order can be told
/// apart from a malformed one.
#[derive(Debug, Deserialize)]
pub struct OrderEnvelope {
    #[serde(default)]
    pub order: Option<Value>,
}

impl OrderEnvelope {
    /// Decode the wrapped order. `Ok(None)` means the upstream has no such order.
    pub fn into_order(self) -> Result<Option<Order>, serde_json::Error> {
        match self.order {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) if map.is_empty() => Ok(None),
            Some(raw) => serde_json::from_value(raw).map(Some),
        }
    }
}

/// One stock record per (item, location)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InventoryLevel {
    pub inventory_item_id: InventoryItemId,
    #[serde(default)]
    pub location_id: Option<LocationId>,
    /// `null` for items whose inventory isn't tracked
    #[serde(default)]
    pub available: Option<AvailableQty>,
}

/// `{"inventory_levels": [...]}`
#[derive(Debug, Deserialize)]
pub struct InventoryLevelList {
    #[serde(default)]
    pub inventory_levels: Vec<InventoryLevel>,
}
