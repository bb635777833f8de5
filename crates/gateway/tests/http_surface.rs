//! End-to-end tests for the HTTP surface: real registry, real dispatcher,
//! requests driven in-process through the axum router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use pool_domain::config::{Config, ProvidersConfig};
use pool_gateway::api;
use pool_gateway::state::AppState;
use pool_providers::ProviderRegistry;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(providers: &[&str]) -> Router {
    let mut config = Config::default();
    config.providers = ProvidersConfig {
        enabled: providers.iter().map(|s| s.to_string()).collect(),
    };
    let registry = Arc::new(ProviderRegistry::from_config(&config.providers));
    api::router(AppState::new(Arc::new(config), registry))
}

fn app() -> Router {
    app_with(&["convex", "material-ui"])
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), Method::GET, uri, None).await
}

async fn rpc(provider: &str, body: Value) -> (StatusCode, Value) {
    send(app(), Method::POST, &format!("/{provider}"), Some(body)).await
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// JSON-RPC
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn create_table_over_jsonrpc() {
    let (status, body) = rpc(
        "convex",
        json!({
            "jsonrpc": "2.0",
            "method": "tools/call",
            "params": { "name": "create_table", "arguments": { "name": "users" } },
            "id": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);
    assert!(body.get("error").is_none());
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Table 'users' created successfully"));
}

#[tokio::test]
async fn initialize_handshake() {
    let (status, body) = rpc(
        "material-ui",
        json!({ "jsonrpc": "2.0", "method": "initialize", "params": {}, "id": "init" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "init");
    assert_eq!(body["result"]["serverInfo"]["name"], "material-ui-mcp-server");
}

#[tokio::test]
async fn invalid_version_is_rejected() {
    let (status, body) = rpc("convex", json!({ "jsonrpc": "1.0", "method": "ping", "id": 9 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], 9);
}

#[tokio::test]
async fn unparseable_body_has_null_id() {
    let resp = app()
        .oneshot(
            Request::post("/convex")
                .header("content-type", "application/json")
                .body(Body::from("]["))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], -32600);
    assert!(body["id"].is_null());
}

#[tokio::test]
async fn notification_returns_204_without_body() {
    let (status, body) = rpc(
        "convex",
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn unknown_method_is_internal_error_code() {
    let (status, body) = rpc(
        "convex",
        json!({ "jsonrpc": "2.0", "method": "prompts/list", "id": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["error"]["data"]["kind"], "method_not_supported");
}

#[tokio::test]
async fn missing_tool_name_is_invalid_params() {
    let (status, body) = rpc(
        "convex",
        json!({ "jsonrpc": "2.0", "method": "tools/call", "params": {}, "id": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn unknown_tool_over_jsonrpc() {
    let (_, body) = rpc(
        "convex",
        json!({ "jsonrpc": "2.0", "method": "tools/call", "params": { "name": "nope" }, "id": 4 }),
    )
    .await;
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["error"]["message"], "Unknown tool: nope");
    assert_eq!(body["error"]["data"]["kind"], "tool_not_found");
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// REST
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn rest_list_tools() {
    let (status, body) = get("/convex/tools").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);
    assert_eq!(body["tools"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn rest_list_resources() {
    let (status, body) = get("/material-ui/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn rest_read_resource_builds_scheme_uri() {
    let (status, body) = get("/convex/resources/tables").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["uri"], "convex://tables");
    assert_eq!(body["contents"][0]["uri"], "convex://tables");
    assert_eq!(body["contents"][0]["mimeType"], "application/json");
}

#[tokio::test]
async fn rest_read_resource_uses_provider_scheme() {
    let (status, body) = get("/material-ui/resources/installation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uri"], "mui://installation");
    assert_eq!(body["contents"][0]["mimeType"], "text/markdown");
}

#[tokio::test]
async fn rest_read_unknown_resource_is_404() {
    let (status, body) = get("/convex/resources/indexes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Resource not found: convex://indexes");
    assert_eq!(body["uri"], "convex://indexes");
}

#[tokio::test]
async fn rest_call_tool() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/convex/tools/insert_document",
        Some(json!({ "table": "users", "document": { "name": "Ada" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["tool"], "insert_document");
    assert!(body["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Document inserted into 'users'"));
}

#[tokio::test]
async fn rest_call_tool_failures() {
    let (status, body) = send(app(), Method::POST, "/convex/tools/nope", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Unknown tool: nope", "tool": "nope" }));

    let (status, body) = send(app(), Method::POST, "/convex/tools/create_table", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing required argument `name`");
    assert!(body.get("code").is_none());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Health & discovery
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn describe_endpoint() {
    let (status, body) = get("/convex").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["protocol"], "JSON-RPC 2.0");
    assert_eq!(body["server"], "convex-mcp-server");
    assert!(body["methods"].as_array().unwrap().contains(&json!("tools/call")));
}

#[tokio::test]
async fn provider_health() {
    let (status, body) = get("/material-ui/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "material-ui-mcp");
    assert_eq!(body["mcp_process"], "running");
}

#[tokio::test]
async fn system_health_lists_registered_providers() {
    let (status, body) = send(app_with(&["convex"]), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["services"],
        json!({ "mcp-pool-server": "running", "convex-mcp": "running" })
    );
}

#[tokio::test]
async fn banner_lists_provider_endpoints() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "MCP Pool Server");
    assert!(body["endpoints"]["/convex"].is_string());
    assert!(body["endpoints"]["/material-ui"].is_string());
}

#[tokio::test]
async fn unregistered_provider_has_no_routes() {
    let (status, body) = send(app_with(&["convex"]), Method::GET, "/material-ui/tools", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: /material-ui/tools");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, body) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Not found: /nope" }));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Material-UI shortcuts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn material_ui_components_shortcut() {
    let (status, body) = get("/material-ui/components").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["components"]["count"], 8);
}

#[tokio::test]
async fn material_ui_generate_shortcut() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/material-ui/generate",
        Some(json!({ "component": "Chip", "props": { "label": "New" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["generated"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("<Chip label=\"New\"></Chip>"));
}

#[tokio::test]
async fn material_ui_shortcuts_absent_without_provider() {
    let (status, _) = send(app_with(&["convex"]), Method::GET, "/material-ui/components", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Concurrency
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn concurrent_requests_to_both_providers() {
    let app = app();
    let calls = (0..8).map(|i| {
        let app = app.clone();
        async move {
            let provider = if i % 2 == 0 { "convex" } else { "material-ui" };
            send(
                app,
                Method::POST,
                &format!("/{provider}"),
                Some(json!({ "jsonrpc": "2.0", "method": "tools/list", "id": i })),
            )
            .await
        }
    });
    for (i, (status, body)) in futures_util::future::join_all(calls).await.into_iter().enumerate() {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], i);
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 5);
    }
}
