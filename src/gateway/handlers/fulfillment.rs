//! Mock ShipBob fulfillment preview
//!
//! The preview and the inventory report go to the log only. The response
//! carries the confirmation message and product names, nothing more.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use tracing::{info, warn};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, MOCK_SHIPBOB_MESSAGE, MockShipbobResponse, ok};
use crate::shopify::orders::{FULFILLMENT_FIELDS, fetch_order};
use crate::shopify::{FulfillmentPreview, InventoryStatus, inventory_status, projector};

/// Build and log a mock ShipBob order request
///
/// GET /mock-shipbob-order/{order_id}
#[utoipa::path(
    get,
    path = "/mock-shipbob-order/{order_id}",
    params(
        ("order_id" = u64, Path, description = "Shopify order ID")
    ),
    responses(
        (status = 200, description = "Preview logged", body = MockShipbobResponse),
        (status = 404, description = "Order not found", body = crate::gateway::types::ErrorResponse),
        (status = 500, description = "Upstream unreachable", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Fulfillment"
)]
pub async fn mock_shipbob_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
) -> ApiResult<MockShipbobResponse> {
    let order = fetch_order(state.shopify.as_ref(), order_id, FULFILLMENT_FIELDS)
        .await?
        .ok_or_else(ApiError::order_not_found)?;

    let product_names = projector::product_names(&order);

    log_preview(&projector::fulfillment_preview(&order));

    let item_ids = projector::inventory_item_ids(&order);
    let status = match inventory_status(state.shopify.as_ref(), &item_ids).await {
        Ok(status) => Some(status),
        Err(e) => {
            warn!("[SHIPBOB] Inventory lookup for order {} failed: {}", order_id, e);
            None
        }
    };
    for line in inventory_report(status.as_ref()) {
        info!("[SHIPBOB] {}", line);
    }

    ok(MockShipbobResponse {
        message: MOCK_SHIPBOB_MESSAGE.to_string(),
        product_names,
    })
}

pub const NO_INVENTORY_LINE: &str =
    "Inventory Status: No inventory status available for the products in this order.";

fn log_preview(preview: &FulfillmentPreview) {
    match preview_report(preview) {
        Ok(json) => info!("[SHIPBOB] Mock order request:\n{}", json),
        Err(e) => warn!("[SHIPBOB] Could not render order {}: {}", preview.order_id, e),
    }
}

/// Pretty JSON of the preview, as printed to the console
pub fn preview_report(preview: &FulfillmentPreview) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(preview)
}

/// Console lines for an inventory lookup. `None` is a failed lookup.
pub fn inventory_report(status: Option<&InventoryStatus>) -> Vec<String> {
    let status = match status {
        Some(status) if !status.is_empty() => status,
        _ => return vec![NO_INVENTORY_LINE.to_string()],
    };

    let sorted: BTreeMap<_, _> = status.iter().collect();
    let mut lines = Vec::with_capacity(sorted.len() + 1);
    lines.push("Inventory Status:".to_string());
    for (item_id, available) in sorted {
        lines.push(format!(
            "Product ID: {}, Available Quantity: {}",
            item_id, available
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::Order;
    use serde_json::json;

    fn widget_order() -> Order {
        serde_json::from_value(json!({
            "id": 5676247515386u64,
            "created_at": "2024-01-01",
            "shipping_address": {"city": "Springfield"},
            "line_items": [
                {"name": "Widget", "inventory_item_id": 111, "product_id": 9, "quantity": 2}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_preview_report_is_pretty_json() {
        let report = preview_report(&projector::fulfillment_preview(&widget_order())).unwrap();

        assert!(report.contains("\"order_id\": \"5676247515386\""));
        assert!(report.contains("\"product_id\": 9"));
        assert!(report.contains("\"order_date\": \"2024-01-01\""));
        assert!(report.contains('\n'));
    }

    #[test]
    fn test_inventory_report_lists_items() {
        let status = InventoryStatus::from([(222, 0), (111, 7)]);

        assert_eq!(
            inventory_report(Some(&status)),
            vec![
                "Inventory Status:",
                "Product ID: 111, Available Quantity: 7",
                "Product ID: 222, Available Quantity: 0",
            ]
        );
    }

    #[test]
    fn test_inventory_report_fallback() {
        assert_eq!(
            inventory_report(Some(&InventoryStatus::new())),
            vec![NO_INVENTORY_LINE]
        );
        assert_eq!(inventory_report(None), vec![NO_INVENTORY_LINE]);
    }

    #[cfg(feature = "mock-upstream")]
    mod console {
        use std::io;
        use std::sync::{Arc, Mutex};

        use axum::extract::{Path, State};
        use serde_json::{Value, json};

        use super::super::*;
        use crate::gateway::AppState;
        use crate::shopify::{MockShopify, UpstreamError};

        const ORDER_RESOURCE: &str = "orders/5676247515386.json";

        #[derive(Clone, Default)]
        struct LogBuffer(Arc<Mutex<Vec<u8>>>);

        impl io::Write for LogBuffer {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl LogBuffer {
            fn contents(&self) -> String {
                String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
            }
        }

        fn order_body() -> Value {
            json!({"order": {
                "id": 5676247515386u64,
                "created_at": "2024-01-01",
                "line_items": [
                    {"name": "Widget", "inventory_item_id": 111, "product_id": 9, "quantity": 2}
                ]
            }})
        }

        /// Run the handler with a thread-local subscriber, return captured output
        async fn run_logged(mock: MockShopify) -> String {
            let buffer = LogBuffer::default();
            let writer = buffer.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .finish();
            let _guard = tracing::subscriber::set_default(subscriber);

            let state = Arc::new(AppState::new(Arc::new(mock)));
            let resp = mock_shipbob_order(State(state), Path(5676247515386))
                .await
                .unwrap();
            assert_eq!(resp.0.product_names, vec!["Widget"]);

            buffer.contents()
        }

        #[tokio::test]
        async fn test_console_shows_preview_and_inventory() {
            let mock = MockShopify::new()
                .with_response(ORDER_RESOURCE, order_body())
                .with_response(
                    "inventory_levels.json",
                    json!({"inventory_levels": [{"inventory_item_id": 111, "available": 7}]}),
                );

            let logs = run_logged(mock).await;

            assert!(logs.contains("\"order_id\": \"5676247515386\""));
            assert!(logs.contains("\"product_id\": 9"));
            assert!(logs.contains("Inventory Status:"));
            assert!(logs.contains("Product ID: 111, Available Quantity: 7"));
            assert!(!logs.contains(NO_INVENTORY_LINE));
        }

        #[tokio::test]
        async fn test_console_fallback_when_lookup_fails() {
            let mock = MockShopify::new()
                .with_response(ORDER_RESOURCE, order_body())
                .with_error(
                    "inventory_levels.json",
                    UpstreamError::http(503, "503 Service Unavailable"),
                );

            let logs = run_logged(mock).await;

            assert!(logs.contains("\"order_id\": \"5676247515386\""));
            assert!(logs.contains(NO_INVENTORY_LINE));
        }

        #[tokio::test]
        async fn test_console_fallback_when_nothing_reported() {
            let mock = MockShopify::new()
                .with_response(ORDER_RESOURCE, order_body())
                .with_response("inventory_levels.json", json!({"inventory_levels": []}));

            let logs = run_logged(mock).await;

            assert!(logs.contains(NO_INVENTORY_LINE));
            assert!(!logs.contains("Available Quantity"));
        }
    }
}
