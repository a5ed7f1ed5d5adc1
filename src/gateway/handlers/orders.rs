//! Order handlers

use std::sync::Arc;

use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, OrdersSummary, ProductNamesResponse, ok};
use crate::shopify::orders::{ORDER_DETAIL_FIELDS, fetch_order, list_orders};
use crate::shopify::projector;

/// List orders of any status
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Order count and ids", body = OrdersSummary),
        (status = 500, description = "Upstream unreachable", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_orders(State(state): State<Arc<AppState>>) -> ApiResult<OrdersSummary> {
    let orders = list_orders(state.shopify.as_ref()).await?;

    ok(OrdersSummary {
        number_of_orders: orders.len(),
        order_numbers: orders.iter().map(|order| order.id).collect(),
    })
}

/// Product names of one order
///
/// GET /order/{order_id}
#[utoipa::path(
    get,
    path = "/order/{order_id}",
    params(
        ("order_id" = u64, Path, description = "Shopify order ID")
    ),
    responses(
        (status = 200, description = "Product names", body = ProductNamesResponse),
        (status = 404, description = "Order not found", body = crate::gateway::types::ErrorResponse),
        (status = 500, description = "Upstream unreachable", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
) -> ApiResult<ProductNamesResponse> {
    match fetch_order(state.shopify.as_ref(), order_id, ORDER_DETAIL_FIELDS).await? {
        Some(order) => ok(ProductNamesResponse {
            product_names: projector::product_names(&order),
        }),
        None => ApiError::order_not_found().into_err(),
    }
}
