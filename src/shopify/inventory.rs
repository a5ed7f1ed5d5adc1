//! Inventory status lookup
//!
//! Turns the inventory-item ids found on an order into a map of
//! available quantities with a single `inventory_levels.json` call.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::client::{ShopifyApi, UpstreamRequest};
use super::error::UpstreamError;
use super::models::{AvailableQty, InventoryItemId, InventoryLevelList};

pub const INVENTORY_LEVELS_RESOURCE: &str = "inventory_levels.json";

/// inventory_item_id -> available quantity
///
/// Holds only ids that were both requested and reported by the upstream.
/// Quantity 0 is a real status; unreported ids are absent.
pub type InventoryStatus = HashMap<InventoryItemId, AvailableQty>;

/// Look up available quantities for `ids`.
///
/// An empty `ids` returns an empty map without calling the upstream.
/// Any upstream failure is an `Err`, never an empty map.
pub async fn inventory_status(
    api: &dyn ShopifyApi,
    ids: &[InventoryItemId],
) -> Result<InventoryStatus, UpstreamError> {
    if ids.is_empty() {
        return Ok(InventoryStatus::new());
    }

    let wanted: BTreeSet<InventoryItemId> = ids.iter().copied().collect();
    let wanted_list: Vec<InventoryItemId> = wanted.iter().copied().collect();

    let request =
        UpstreamRequest::new(INVENTORY_LEVELS_RESOURCE).ids("inventory_item_ids", &wanted_list);
    let body = api.get_json(&request).await?;
    let levels: InventoryLevelList = serde_json::from_value(body)?;

    let mut status = InventoryStatus::new();
    for level in levels.inventory_levels {
        if !wanted.contains(&level.inventory_item_id) {
            debug!(
                "[INVENTORY] Ignoring unrequested item {}",
                level.inventory_item_id
            );
            continue;
        }
        // Untracked at this location
        let Some(available) = level.available else {
            continue;
        };
        *status.entry(level.inventory_item_id).or_insert(0) += available;
    }

    Ok(status)
}

#[cfg(all(test, feature = "mock-upstream"))]
mod tests {
    use super::*;
    use crate::shopify::mock::MockShopify;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_ids_make_no_call() {
        let mock = MockShopify::new();

        let status = inventory_status(&mock, &[]).await.unwrap();

        assert!(status.is_empty());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_single_call_with_joined_ids() {
        let mock = MockShopify::new().with_response(
            INVENTORY_LEVELS_RESOURCE,
            json!({"inventory_levels": [
                {"inventory_item_id": 111, "location_id": 1, "available": 7},
                {"inventory_item_id": 222, "location_id": 1, "available": 0}
            ]}),
        );

        let status = inventory_status(&mock, &[222, 111, 222]).await.unwrap();

        assert_eq!(mock.call_count(), 1);
        assert_eq!(
            mock.calls()[0].query_value("inventory_item_ids"),
            Some("111,222")
        );
        assert_eq!(status.get(&111), Some(&7));
        assert_eq!(status.get(&222), Some(&0));
    }

    #[tokio::test]
    async fn test_unreported_ids_are_absent() {
        let mock = MockShopify::new().with_response(
            INVENTORY_LEVELS_RESOURCE,
            json!({"inventory_levels": [
                {"inventory_item_id": 111, "available": 3},
                {"inventory_item_id": 999, "available": 50}
            ]}),
        );

        let status = inventory_status(&mock, &[111, 333]).await.unwrap();

        assert_eq!(status.len(), 1);
        assert_eq!(status.get(&111), Some(&3));
        assert!(!status.contains_key(&333));
        assert!(!status.contains_key(&999));
    }

    #[tokio::test]
    async fn test_locations_are_summed_and_null_skipped() {
        let mock = MockShopify::new().with_response(
            INVENTORY_LEVELS_RESOURCE,
            json!({"inventory_levels": [
                {"inventory_item_id": 111, "location_id": 1, "available": 4},
                {"inventory_item_id": 111, "location_id": 2, "available": 6},
                {"inventory_item_id": 222, "location_id": 1, "available": null}
            ]}),
        );

        let status = inventory_status(&mock, &[111, 222]).await.unwrap();

        assert_eq!(status.get(&111), Some(&10));
        assert!(!status.contains_key(&222));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_err_not_empty() {
        let mock = MockShopify::new().with_error(
            INVENTORY_LEVELS_RESOURCE,
            UpstreamError::http(503, "503 Service Unavailable"),
        );

        let res = inventory_status(&mock, &[111]).await;

        assert!(res.is_err());
        assert_eq!(res.unwrap_err().status(), Some(503));
    }

    #[tokio::test]
    async fn test_undecodable_levels_is_err() {
        let mock = MockShopify::new().with_response(
            INVENTORY_LEVELS_RESOURCE,
            json!({"inventory_levels": "nope"}),
        );

        assert!(matches!(
            inventory_status(&mock, &[111]).await,
            Err(UpstreamError::Transport(_))
        ));
    }
}
