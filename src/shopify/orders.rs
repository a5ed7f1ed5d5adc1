//! Order reads

use super::client::{ShopifyApi, UpstreamRequest};
use super::error::UpstreamError;
use super::models::{Order, OrderEnvelope, OrderId, OrderList};

/// Fields needed to list product names of an order
pub const ORDER_DETAIL_FIELDS: &[&str] = &[
    "id",
    "line_items",
    "name",
    "total_price",
    "line_items.inventory_item_id",
];

/// Fields needed to build a fulfillment preview
pub const FULFILLMENT_FIELDS: &[&str] = &[
    "id",
    "line_items",
    "shipping_address",
    "created_at",
    "line_items.inventory_item_id",
];

pub fn order_resource(order_id: OrderId) -> String {
    format!("orders/{}.json", order_id)
}

/// All orders, any status. Only the first page is read.
pub async fn list_orders(api: &dyn ShopifyApi) -> Result<Vec<Order>, UpstreamError> {
    let request = UpstreamRequest::new("orders.json").param("status", "any");
    let body = api.get_json(&request).await?;
    let list: OrderList = serde_json::from_value(body)?;
    Ok(list.orders)
}

/// One order restricted to `fields`. `Ok(None)` when the upstream has no such order.
pub async fn fetch_order(
    api: &dyn ShopifyApi,
    order_id: OrderId,
    fields: &[&str],
) -> Result<Option<Order>, UpstreamError> {
    let request = UpstreamRequest::new(order_resource(order_id)).fields(fields);
    let body = api.get_json(&request).await?;
    let envelope: OrderEnvelope = serde_json::from_value(body)?;
    Ok(envelope.into_order()?)
}
