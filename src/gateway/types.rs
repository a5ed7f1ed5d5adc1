//! Gateway response and error types
//!
//! Every error leaves the gateway as `{"error": "<message>"}` with the
//! status chosen by [`ApiError`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::shopify::UpstreamError;

pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const MOCK_SHIPBOB_MESSAGE: &str = "Mock Shipbob order request printed to console";

// ============================================================================
// Response DTOs
// ============================================================================

/// GET /orders
#[derive(Debug, Serialize, ToSchema)]
pub struct OrdersSummary {
    #[schema(example = 2)]
    pub number_of_orders: usize,
    #[schema(example = json!([5676247515386_u64, 5676247515387_u64]))]
    pub order_numbers: Vec<u64>,
}

/// GET /order/{order_id}
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductNamesResponse {
    #[schema(example = json!(["Widget"]))]
    pub product_names: Vec<String>,
}

/// GET /mock-shipbob-order/{order_id}
#[derive(Debug, Serialize, ToSchema)]
pub struct MockShipbobResponse {
    #[schema(example = "Mock Shipbob order request printed to console")]
    pub message: String,
    #[schema(example = json!(["Widget"]))]
    pub product_names: Vec<String>,
}

/// Error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Order not found")]
    pub error: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn order_not_found() -> Self {
        Self::not_found(ORDER_NOT_FOUND)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

/// Upstream HTTP errors keep their status, everything else is a 500.
impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        let message = e.to_string();
        match e.status().and_then(|s| StatusCode::from_u16(s).ok()) {
            Some(status) => Self::new(status, message),
            None => Self::internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("[GATEWAY] {} {}", self.status.as_u16(), self.message);
        } else {
            warn!("[GATEWAY] {} {}", self.status.as_u16(), self.message);
        }
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_http_status_is_mirrored() {
        let err: ApiError = UpstreamError::http(403, "403 Forbidden for url: x").into();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message, "403 Forbidden for url: x");

        let err: ApiError = UpstreamError::http(502, "502 Bad Gateway").into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_transport_is_internal() {
        let err: ApiError = UpstreamError::transport("connection reset").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_upstream_status_is_internal() {
        let err: ApiError = UpstreamError::http(42, "weird").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let resp = ApiError::order_not_found().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
