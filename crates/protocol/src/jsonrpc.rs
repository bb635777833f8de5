//! JSON-RPC 2.0 envelope types.
//!
//! Correlation ids are kept as raw JSON values: clients send numbers,
//! strings, or nothing at all, and the id is echoed back untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only protocol version the gateway accepts.
pub const JSONRPC_VERSION: &str = "2.0";

/// Methods under this namespace are notifications: no response body is owed.
pub const NOTIFICATION_PREFIX: &str = "notifications/";

// JSON-RPC 2.0 standard error codes used by the gateway.
pub const INVALID_REQUEST: i64 = -32600;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Whether `method` lives in the notifications namespace.
pub fn is_notification_method(method: &str) -> bool {
    method.starts_with(NOTIFICATION_PREFIX)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Requests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A JSON-RPC 2.0 request or notification envelope, as received.
///
/// Decoding checks only the field types; the version literal is checked
/// by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    pub fn has_valid_version(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION
    }

    pub fn is_notification(&self) -> bool {
        is_notification_method(&self.method)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Responses
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A JSON-RPC 2.0 response.
///
/// `id` is always serialized: a request whose id could not be recovered is
/// answered with `"id": null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: Value,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            result: Some(result),
            error: None,
            id: id.unwrap_or(Value::Null),
        }
    }

    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            result: None,
            error: Some(error),
            id: id.unwrap_or(Value::Null),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, message)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JSON-RPC error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for JsonRpcError {}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_request_with_string_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"tools/list","id":"abc"}"#;
        let req: JsonRpcRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.id, Some(json!("abc")));
        assert!(req.params.is_none());
        assert!(!req.is_notification());
    }

    #[test]
    fn notification_decodes_without_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let req: JsonRpcRequest = serde_json::from_str(raw).unwrap();
        assert!(req.id.is_none());
        assert!(req.is_notification());
        assert!(req.has_valid_version());
    }

    #[test]
    fn version_is_decoded_not_enforced() {
        let raw = r#"{"jsonrpc":"1.0","method":"ping","id":1}"#;
        let req: JsonRpcRequest = serde_json::from_str(raw).unwrap();
        assert!(!req.has_valid_version());
    }

    #[test]
    fn non_string_method_fails_to_decode() {
        let raw = r#"{"jsonrpc":"2.0","method":7,"id":1}"#;
        assert!(serde_json::from_str::<JsonRpcRequest>(raw).is_err());
    }

    #[test]
    fn notification_namespace_is_a_prefix_match() {
        assert!(is_notification_method("notifications/cancelled"));
        assert!(!is_notification_method("notifications"));
        assert!(!is_notification_method("tools/notifications/x"));
    }

    #[test]
    fn success_response_shape() {
        let resp = JsonRpcResponse::success(Some(json!(1)), json!({"status": "pong"}));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "result": {"status": "pong"}, "id": 1})
        );
    }

    #[test]
    fn error_response_without_id_serializes_null() {
        let resp = JsonRpcResponse::error(None, JsonRpcError::invalid_request("Invalid Request"));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert_eq!(value["error"]["code"], json!(INVALID_REQUEST));
        assert!(value.get("result").is_none());
    }

    #[test]
    fn error_data_is_omitted_unless_set() {
        let bare = serde_json::to_value(JsonRpcError::new(INTERNAL_ERROR, "boom")).unwrap();
        assert!(bare.get("data").is_none());
        let tagged = JsonRpcError::invalid_request("Invalid Request").with_data(json!({"kind": "x"}));
        assert_eq!(serde_json::to_value(&tagged).unwrap()["data"]["kind"], "x");
    }

    #[test]
    fn jsonrpc_error_display() {
        let err = JsonRpcError::new(INTERNAL_ERROR, "Tool failed");
        assert_eq!(format!("{err}"), "JSON-RPC error -32603: Tool failed");
    }
}
