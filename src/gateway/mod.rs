pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

/// Build the gateway router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/orders", get(handlers::get_orders))
        .route("/order/{order_id}", get(handlers::get_order))
        .route(
            "/mock-shipbob-order/{order_id}",
            get(handlers::mock_shipbob_order),
        )
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("[GATEWAY] Failed to bind to {}: {}", addr, e);
        tracing::error!(
            "[GATEWAY] Hint: port {} may already be in use. Check with: lsof -i :{}",
            port,
            port
        );
        e
    })?;

    tracing::info!("[GATEWAY] Listening on http://{}", addr);
    tracing::info!("[GATEWAY] API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await
}
