//! Order projections
//!
//! Pure reductions of an [`Order`] into the views the gateway needs.
//! Missing optional fields drop the item from a view; they never fail it.

use serde::Serialize;
use serde_json::Value;

use super::models::{InventoryItemId, Order, ProductId};

/// Order formatted for a third-party fulfillment request (never sent)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FulfillmentPreview {
    pub order_id: String,
    pub order_date: Option<String>,
    pub order_items: Vec<FulfillmentItem>,
    pub shipping_address: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FulfillmentItem {
    pub product_id: Option<ProductId>,
    pub quantity: u32,
}

/// Line-item display names, in order
pub fn product_names(order: &Order) -> Vec<String> {
    order.line_items.iter().map(|item| item.name.clone()).collect()
}

pub fn fulfillment_preview(order: &Order) -> FulfillmentPreview {
    FulfillmentPreview {
        order_id: order.id.to_string(),
        order_date: order.created_at.clone(),
        order_items: order
            .line_items
            .iter()
            .map(|item| FulfillmentItem {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect(),
        shipping_address: order.shipping_address.clone().unwrap_or(Value::Null),
    }
}

/// Inventory-item ids of the line items that carry one
pub fn inventory_item_ids(order: &Order) -> Vec<InventoryItemId> {
    order
        .line_items
        .iter()
        .filter_map(|item| item.inventory_item_id)
        .collect()
}
