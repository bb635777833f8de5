//! Shortcuts that only exist when the `material-ui` provider is registered.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};

use crate::dispatch::{DispatchError, Outcome};
use crate::state::AppState;

pub const PROVIDER: &str = "material-ui";

const COMPONENTS_URI: &str = "mui://components";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&format!("/{PROVIDER}/components"), get(components))
        .route(&format!("/{PROVIDER}/generate"), post(generate))
}

fn failure(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "success": false, "error": message }))).into_response()
}

fn dispatch_failure(e: &DispatchError) -> Response {
    tracing::warn!(provider = PROVIDER, kind = %e.kind(), error = %e, "material-ui shortcut failed");
    failure(super::rest::error_status(e.kind()), e.to_string())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /material-ui/components
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The `mui://components` resource, parsed back into JSON.
pub async fn components(State(state): State<AppState>) -> Response {
    let params = json!({ "uri": COMPONENTS_URI });
    let outcome = match state
        .dispatcher
        .dispatch(PROVIDER, "resources/read", Some(params))
        .await
    {
        Ok(o) => o,
        Err(e) => return dispatch_failure(&e),
    };

    let text = match &outcome {
        Outcome::Success(v) => v
            .pointer("/contents/0/text")
            .and_then(Value::as_str)
            .map(str::to_owned),
        Outcome::Acknowledged => None,
    };

    let components = match text {
        Some(text) => match serde_json::from_str::<Value>(&text) {
            Ok(v) => v,
            Err(e) => {
                return failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{COMPONENTS_URI} is not valid JSON: {e}"),
                )
            }
        },
        None => json!({}),
    };

    Json(json!({ "success": true, "components": components })).into_response()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /material-ui/generate
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `generate_component` with the request body as its arguments.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let arguments = if body.is_empty() {
        json!({})
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(e) => {
                return failure(
                    StatusCode::BAD_REQUEST,
                    format!("request body is not valid JSON: {e}"),
                )
            }
        }
    };

    let params = json!({ "name": "generate_component", "arguments": arguments });
    match state
        .dispatcher
        .dispatch(PROVIDER, "tools/call", Some(params))
        .await
    {
        Ok(Outcome::Success(generated)) => {
            Json(json!({ "success": true, "generated": generated })).into_response()
        }
        Ok(Outcome::Acknowledged) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => dispatch_failure(&e),
    }
}
