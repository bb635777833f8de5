//! REST convenience routes.
//!
//! Each handler performs exactly one dispatcher call and reshapes the
//! outcome into a `{success, ...}` body. JSON-RPC codes never appear here;
//! failures carry only the message text and an HTTP status.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Extension;
use serde_json::{json, Map, Value};

use super::ProviderName;
use crate::dispatch::{DispatchError, ErrorKind, Outcome, METHODS};
use crate::state::AppState;

/// HTTP status for a failed REST call.
pub fn error_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ProviderNotFound | ErrorKind::ToolNotFound | ErrorKind::ResourceNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorKind::InvalidParams | ErrorKind::InvalidRequest | ErrorKind::MethodNotSupported => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::ToolExecutionError | ErrorKind::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `{success:false, error}` plus any `extra` fields, with the mapped status.
fn failure(err: &DispatchError, extra: &[(&str, &str)]) -> Response {
    let mut body = Map::new();
    body.insert("success".into(), Value::Bool(false));
    body.insert("error".into(), Value::String(err.to_string()));
    for (k, v) in extra {
        body.insert((*k).to_string(), Value::String((*v).to_string()));
    }
    (error_status(err.kind()), Json(Value::Object(body))).into_response()
}

/// Run one dispatcher call, logging failures.
async fn run(
    state: &AppState,
    provider: &str,
    method: &str,
    params: Option<Value>,
) -> Result<Outcome, DispatchError> {
    let result = state.dispatcher.dispatch(provider, method, params).await;
    if let Err(e) = &result {
        tracing::warn!(provider = %provider, method = %method, kind = %e.kind(), error = %e, "REST call failed");
    }
    result
}

/// Pull `field` out of a success payload. An acknowledged outcome has none.
fn take_field(outcome: Outcome, field: &str) -> Value {
    match outcome {
        Outcome::Success(mut v) => v.get_mut(field).map(Value::take).unwrap_or(Value::Null),
        Outcome::Acknowledged => Value::Null,
    }
}

/// Full resource URI for a `/resources/*` tail.
///
/// A tail that already carries the provider's name or URI scheme is used
/// verbatim; anything else is prefixed with `{scheme}://`.
///
/// The prefix is the provider's own URI scheme, not its route name: the two
/// differ for `material-ui`, whose resources live under `mui://`, so
/// `/material-ui/resources/theme` reads `mui://theme` rather than the
/// unlisted `material-ui://theme`.
pub fn resource_uri(provider: &str, scheme: &str, tail: &str) -> String {
    if tail.starts_with(&format!("{provider}://")) || tail.starts_with(&format!("{scheme}://")) {
        tail.to_string()
    } else {
        format!("{scheme}://{tail}")
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /{provider}  (endpoint description)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn describe(Extension(provider): Extension<ProviderName>) -> impl IntoResponse {
    Json(json!({
        "transport": "MCP-over-HTTP",
        "protocol": "JSON-RPC 2.0",
        "version": pool_protocol::mcp::PROTOCOL_VERSION,
        "server": format!("{}-mcp-server", provider.as_str()),
        "methods": METHODS,
        "usage": "POST with JSON-RPC 2.0 payload",
        "endpoints": {
            "/health": "Health check",
            "/tools": "List available tools (REST)",
            "/tools/:toolName": "Call a tool with the request body as arguments (REST)",
            "/resources": "List available resources (REST)",
            "/resources/*": "Read a resource (REST)",
            "/": "MCP JSON-RPC endpoint (POST)",
        },
    }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /{provider}/tools
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn list_tools(
    State(state): State<AppState>,
    Extension(provider): Extension<ProviderName>,
) -> Response {
    match run(&state, provider.as_str(), "tools/list", None).await {
        Ok(outcome) => {
            let tools = take_field(outcome, "tools");
            let count = tools.as_array().map_or(0, Vec::len);
            Json(json!({ "success": true, "tools": tools, "count": count })).into_response()
        }
        Err(e) => failure(&e, &[]),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /{provider}/resources
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn list_resources(
    State(state): State<AppState>,
    Extension(provider): Extension<ProviderName>,
) -> Response {
    match run(&state, provider.as_str(), "resources/list", None).await {
        Ok(outcome) => {
            let resources = take_field(outcome, "resources");
            let count = resources.as_array().map_or(0, Vec::len);
            Json(json!({ "success": true, "resources": resources, "count": count }))
                .into_response()
        }
        Err(e) => failure(&e, &[]),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /{provider}/tools/:tool
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn call_tool(
    State(state): State<AppState>,
    Extension(provider): Extension<ProviderName>,
    Path(tool): Path<String>,
    body: Bytes,
) -> Response {
    // An empty body means "no arguments".
    let arguments = if body.is_empty() {
        json!({})
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(e) => {
                let err = DispatchError::InvalidRequest(format!("request body is not valid JSON: {e}"));
                return failure(&err, &[("tool", tool.as_str())]);
            }
        }
    };

    let params = json!({ "name": tool, "arguments": arguments });
    match run(&state, provider.as_str(), "tools/call", Some(params)).await {
        Ok(Outcome::Success(result)) => {
            Json(json!({ "success": true, "tool": tool, "result": result })).into_response()
        }
        Ok(Outcome::Acknowledged) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => failure(&e, &[("tool", tool.as_str())]),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /{provider}/resources/*tail
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn read_resource(
    State(state): State<AppState>,
    Extension(provider): Extension<ProviderName>,
    Path(tail): Path<String>,
) -> Response {
    let name = provider.as_str();
    let scheme = match state.registry.get(name) {
        Ok(p) => p.uri_scheme().unwrap_or(name).to_string(),
        Err(e) => return failure(&DispatchError::from(e), &[("uri", tail.as_str())]),
    };
    let uri = resource_uri(name, &scheme, &tail);

    match run(&state, name, "resources/read", Some(json!({ "uri": uri }))).await {
        Ok(outcome) => {
            let contents = match take_field(outcome, "contents") {
                Value::Null => json!([]),
                other => other,
            };
            Json(json!({ "success": true, "uri": uri, "contents": contents })).into_response()
        }
        Err(e) => failure(&e, &[("uri", uri.as_str())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_is_prefixed_with_scheme() {
        assert_eq!(resource_uri("convex", "convex", "tables"), "convex://tables");
        assert_eq!(resource_uri("material-ui", "mui", "theme"), "mui://theme");
    }

    #[test]
    fn tail_with_scheme_is_verbatim() {
        assert_eq!(resource_uri("convex", "convex", "convex://tables"), "convex://tables");
        assert_eq!(resource_uri("material-ui", "mui", "mui://theme"), "mui://theme");
        assert_eq!(
            resource_uri("material-ui", "mui", "material-ui://theme"),
            "material-ui://theme"
        );
    }

    #[test]
    fn nested_tail_keeps_slashes() {
        assert_eq!(resource_uri("convex", "convex", "a/b"), "convex://a/b");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(error_status(ErrorKind::ToolNotFound), StatusCode::NOT_FOUND);
        assert_eq!(error_status(ErrorKind::ProviderNotFound), StatusCode::NOT_FOUND);
        assert_eq!(error_status(ErrorKind::InvalidParams), StatusCode::BAD_REQUEST);
        assert_eq!(error_status(ErrorKind::MethodNotSupported), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_status(ErrorKind::ToolExecutionError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
