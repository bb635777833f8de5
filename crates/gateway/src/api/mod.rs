pub mod health;
pub mod jsonrpc;
pub mod material_ui;
pub mod rest;

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Name of the provider a route set was installed for.
///
/// Attached as a request extension to every per-provider route so handlers
/// do not have to re-parse the path.
#[derive(Debug, Clone)]
pub struct ProviderName(pub String);

impl ProviderName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build the full HTTP surface.
///
/// Process-wide routes (`/`, `/health`) are always present. Every provider
/// in the registry gets its own route set under `/{name}`; nothing is
/// installed for names that are not registered, so those fall through to
/// the 404 handler.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::system_health));

    for name in state.registry.names() {
        app = app.merge(provider_routes(&name));
    }

    if state.registry.contains(material_ui::PROVIDER) {
        app = app.merge(material_ui::routes());
    }

    app.fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn provider_routes(name: &str) -> Router<AppState> {
    let base = format!("/{name}");
    Router::new()
        .route(&base, get(rest::describe).post(jsonrpc::handle))
        .route(&format!("{base}/health"), get(health::provider_health))
        .route(&format!("{base}/tools"), get(rest::list_tools))
        .route(&format!("{base}/tools/:tool"), post(rest::call_tool))
        .route(&format!("{base}/resources"), get(rest::list_resources))
        .route(&format!("{base}/resources/*tail"), get(rest::read_resource))
        .layer(Extension(ProviderName(name.to_string())))
}

async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": format!("Not found: {}", uri.path()),
        })),
    )
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
