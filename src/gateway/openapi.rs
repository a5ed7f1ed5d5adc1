//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5000/docs`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{
    ErrorResponse, MockShipbobResponse, OrdersSummary, ProductNamesResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopify Bridge API",
        version = "0.1.0",
        description = "Read-only views over Shopify Admin orders and inventory.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::orders::get_orders,
        crate::gateway::handlers::orders::get_order,
        crate::gateway::handlers::fulfillment::mock_shipbob_order,
    ),
    components(
        schemas(
            OrdersSummary,
            ProductNamesResponse,
            MockShipbobResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order list and detail"),
        (name = "Fulfillment", description = "Mock fulfillment preview (logged, not sent)")
    )
)]
pub struct ApiDoc;
