//! JSON-RPC 2.0 adapter: `POST /{provider}`.
//!
//! The body is taken as raw bytes so that undecodable or oversized payloads
//! can still be answered with a proper `InvalidRequest` envelope instead of
//! axum's plain-text rejection.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Extension;
use pool_protocol::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST};
use pool_protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use serde_json::{json, Value};

use super::ProviderName;
use crate::dispatch::{DispatchError, ErrorKind, Outcome};
use crate::state::AppState;

const INVALID_REQUEST_MESSAGE: &str = "Invalid Request";

/// JSON-RPC error code for a dispatcher failure kind.
pub fn error_code(kind: ErrorKind) -> i64 {
    match kind {
        ErrorKind::InvalidRequest => INVALID_REQUEST,
        ErrorKind::InvalidParams => INVALID_PARAMS,
        _ => INTERNAL_ERROR,
    }
}

/// HTTP status carrying a JSON-RPC error envelope.
pub fn error_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(provider): Extension<ProviderName>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(
                provider = %provider.as_str(),
                error = %rejection.body_text(),
                "JSON-RPC body rejected"
            );
            return invalid_request(None, &rejection.body_text());
        }
    };

    let envelope: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(provider = %provider.as_str(), error = %e, "undecodable JSON-RPC body");
            return invalid_request(None, &format!("body is not valid JSON: {e}"));
        }
    };

    let Some(id) = envelope.as_object().map(|obj| obj.get("id").cloned()) else {
        return invalid_request(None, "envelope must be a JSON object");
    };

    let request: JsonRpcRequest = match serde_json::from_value(envelope) {
        Ok(r) => r,
        Err(e) => return invalid_request(id, &format!("malformed envelope: {e}")),
    };
    if !request.has_valid_version() {
        return invalid_request(id, "jsonrpc must be \"2.0\"");
    }
    let notification = request.is_notification();
    let JsonRpcRequest { method, params, .. } = request;

    tracing::debug!(
        provider = %provider.as_str(),
        method = %method,
        notification,
        "JSON-RPC request"
    );

    match state
        .dispatcher
        .dispatch(provider.as_str(), &method, params)
        .await
    {
        Ok(Outcome::Acknowledged) => StatusCode::NO_CONTENT.into_response(),
        Ok(Outcome::Success(result)) => Json(JsonRpcResponse::success(id, result)).into_response(),
        Err(e) => {
            tracing::warn!(
                provider = %provider.as_str(),
                method = %method,
                kind = %e.kind(),
                error = %e,
                "JSON-RPC call failed"
            );
            error_response(id, &e)
        }
    }
}

fn error_response(id: Option<Value>, err: &DispatchError) -> Response {
    let kind = err.kind();
    let error = JsonRpcError::new(error_code(kind), err.to_string())
        .with_data(json!({ "kind": kind.as_str() }));
    (error_status(kind), Json(JsonRpcResponse::error(id, error))).into_response()
}

/// Envelope rejected before dispatch. `reason` goes into `error.data`.
fn invalid_request(id: Option<Value>, reason: &str) -> Response {
    let error = JsonRpcError::invalid_request(INVALID_REQUEST_MESSAGE).with_data(json!({
        "kind": ErrorKind::InvalidRequest.as_str(),
        "reason": reason,
    }));
    (StatusCode::BAD_REQUEST, Json(JsonRpcResponse::error(id, error))).into_response()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
