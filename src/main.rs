//! Shopify Bridge
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  Client  │───▶│ Gateway  │───▶│  Shopify  │───▶│ Shopify  │
//! │  (HTTP)  │    │ (axum)   │    │  Client   │    │ Admin API│
//! └──────────┘    └──────────┘    └───────────┘    └──────────┘
//! ```
//!
//! Usage: `shopify_bridge [--env dev] [--config path.yaml] [--port 5000]`

use std::sync::Arc;

use anyhow::Context;

use shopify_bridge::config::AppConfig;
use shopify_bridge::gateway::{AppState, run_server};
use shopify_bridge::logging::init_logging;
use shopify_bridge::shopify::{ShopifyApi, ShopifyClient};

fn arg_value(flags: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if flags.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    arg_value(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    arg_value(&["--port"]).and_then(|p| p.parse().ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = match arg_value(&["--config", "-c"]) {
        Some(path) => AppConfig::from_file(&path),
        None => AppConfig::load(&env),
    }
    .context("Failed to load configuration")?;

    let _log_guard = init_logging(&app_config);

    tracing::info!(
        "Starting Shopify Bridge {} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("SHOPIFY_BRIDGE_BUILD"),
        env
    );
    tracing::info!(
        "Upstream store: {} (API {})",
        app_config.shopify.store_url,
        app_config.shopify.api_version
    );

    let client = ShopifyClient::new(&app_config.shopify).context("Failed to build Shopify client")?;
    tracing::info!("Shopify API base: {}", client.api_base());
    let shopify: Arc<dyn ShopifyApi> = Arc::new(client);

    let state = Arc::new(
        AppState::new(shopify).with_sample_order_id(app_config.gateway.sample_order_id),
    );

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    run_server(&app_config.gateway.host, port, state)
        .await
        .context("Gateway server error")?;

    Ok(())
}
