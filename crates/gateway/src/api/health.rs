//! Process-wide banner and health routes, plus the per-provider health check.

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use axum::Extension;
use serde_json::{json, Map, Value};

use super::{timestamp, ProviderName};
use crate::state::AppState;

/// Service name reported by `GET /health` alongside each provider.
pub const SERVICE_NAME: &str = "mcp-pool-server";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut endpoints = Map::new();
    endpoints.insert("/health".into(), Value::from("Overall system health"));
    for name in state.registry.names() {
        endpoints.insert(
            format!("/{name}"),
            Value::from(format!("{name} MCP endpoint (JSON-RPC)")),
        );
    }

    Json(json!({
        "service": "MCP Pool Server",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Unified HTTP server for multiple MCPs",
        "endpoints": endpoints,
    }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /health
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn system_health(State(state): State<AppState>) -> impl IntoResponse {
    let mut services = Map::new();
    services.insert(SERVICE_NAME.into(), Value::from("running"));
    for name in state.registry.names() {
        services.insert(format!("{name}-mcp"), Value::from("running"));
    }

    Json(json!({
        "status": "healthy",
        "timestamp": timestamp(),
        "services": services,
    }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /{provider}/health
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Registry lookup only; the provider itself is never called.
pub async fn provider_health(
    State(state): State<AppState>,
    Extension(provider): Extension<ProviderName>,
) -> impl IntoResponse {
    let name = provider.as_str();
    let process = if state.registry.contains(name) {
        "running"
    } else {
        "stopped"
    };

    Json(json!({
        "status": "healthy",
        "service": format!("{name}-mcp"),
        "timestamp": timestamp(),
        "mcp_process": process,
    }))
}
