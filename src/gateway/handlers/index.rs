use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use super::super::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_index(state.sample_order_id))
}

fn render_index(sample_order_id: u64) -> String {
    format!(
        r#"<h1>Welcome to the Shopify Data Handling App!</h1>
<ul>
    <li><a href="/orders">Orders</a></li>
    <li><a href="/order/{id}">Order #{id}</a></li>
    <li><a href="/mock-shipbob-order/{id}">Mock Shipbob Order</a></li>
    <li><a href="/docs">API Docs</a></li>
</ul>
"#,
        id = sample_order_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_links_sample_order() {
        let html = render_index(42);
        assert!(html.contains(r#"href="/orders""#));
        assert!(html.contains(r#"href="/order/42""#));
        assert!(html.contains(r#"href="/mock-shipbob-order/42""#));
    }
}
