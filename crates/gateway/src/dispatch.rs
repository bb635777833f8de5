//! Method dispatcher.
//!
//! Maps a protocol method onto one [`Provider`] operation and normalizes
//! whatever the provider returns into an [`Outcome`] or a [`DispatchError`].
//! Both HTTP adapters go through here; neither talks to a provider directly.

use std::sync::Arc;

use pool_protocol::jsonrpc::is_notification_method;
use pool_protocol::{InitializeResult, ResourceReadResult, ResourcesListResult, ToolsListResult};
use pool_providers::{Provider, ProviderError, ProviderRegistry, RegistryError};
use serde_json::{json, Value};

/// Methods answered by the dispatcher, in the order they are advertised.
pub const METHODS: &[&str] = &[
    "initialize",
    "tools/list",
    "tools/call",
    "resources/list",
    "resources/read",
    "ping",
];

/// Version reported in the `initialize` handshake.
pub const SERVER_VERSION: &str = "1.0.0";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Outcome & errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Successful result of a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A payload the adapter must render.
    Success(Value),
    /// A notification was accepted; no response body is owed.
    Acknowledged,
}

/// Failure taxonomy shared by every adapter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Method {0} not supported")]
    MethodNotSupported(String),
    #[error("MCP '{0}' not found")]
    ProviderNotFound(String),
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("{0}")]
    InvalidParams(String),
    #[error("{0}")]
    ToolExecution(String),
    #[error("{0}")]
    Internal(String),
}

/// Fieldless mirror of [`DispatchError`] used for code/status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    MethodNotSupported,
    ProviderNotFound,
    ToolNotFound,
    ResourceNotFound,
    InvalidParams,
    ToolExecutionError,
    InternalError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::MethodNotSupported => "method_not_supported",
            Self::ProviderNotFound => "provider_not_found",
            Self::ToolNotFound => "tool_not_found",
            Self::ResourceNotFound => "resource_not_found",
            Self::InvalidParams => "invalid_params",
            Self::ToolExecutionError => "tool_execution_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::MethodNotSupported(_) => ErrorKind::MethodNotSupported,
            Self::ProviderNotFound(_) => ErrorKind::ProviderNotFound,
            Self::ToolNotFound(_) => ErrorKind::ToolNotFound,
            Self::ResourceNotFound(_) => ErrorKind::ResourceNotFound,
            Self::InvalidParams(_) => ErrorKind::InvalidParams,
            Self::ToolExecution(_) => ErrorKind::ToolExecutionError,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }
}

impl From<ProviderError> for DispatchError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::ToolNotFound(name) => Self::ToolNotFound(name),
            ProviderError::ResourceNotFound(uri) => Self::ResourceNotFound(uri),
            ProviderError::InvalidArguments(msg) => Self::InvalidParams(msg),
            ProviderError::Execution(msg) => Self::ToolExecution(msg),
            ProviderError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RegistryError> for DispatchError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(name) => Self::ProviderNotFound(name),
            other => Self::Internal(other.to_string()),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Dispatch seam
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Anything that can answer `(provider, method, params)`.
///
/// The HTTP adapters hold an `Arc<dyn Dispatch>` so tests can substitute a
/// recording implementation.
#[async_trait::async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(
        &self,
        provider: &str,
        method: &str,
        params: Option<Value>,
    ) -> Result<Outcome, DispatchError>;
}

/// The registry-backed dispatcher.
pub struct Dispatcher {
    registry: Arc<ProviderRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    async fn call_tool(
        &self,
        provider: &dyn Provider,
        params: Option<Value>,
    ) -> Result<Outcome, DispatchError> {
        let mut params = params.unwrap_or(Value::Null);
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| DispatchError::InvalidParams("missing required parameter `name`".into()))?;
        let arguments = params
            .get_mut("arguments")
            .map(Value::take)
            .unwrap_or(Value::Null);

        let result = provider.call_tool(&name, arguments).await?;
        Ok(Outcome::Success(to_value(&result)?))
    }

    async fn read_resource(
        &self,
        provider: &dyn Provider,
        params: Option<Value>,
    ) -> Result<Outcome, DispatchError> {
        let uri = params
            .as_ref()
            .and_then(|p| p.get("uri"))
            .and_then(Value::as_str)
            .ok_or_else(|| DispatchError::InvalidParams("missing required parameter `uri`".into()))?;

        let contents = provider.read_resource(uri).await?;
        Ok(Outcome::Success(to_value(&ResourceReadResult { contents })?))
    }
}

#[async_trait::async_trait]
impl Dispatch for Dispatcher {
    async fn dispatch(
        &self,
        provider_name: &str,
        method: &str,
        params: Option<Value>,
    ) -> Result<Outcome, DispatchError> {
        let provider = self.registry.get(provider_name)?;

        if is_notification_method(method) {
            tracing::debug!(provider = %provider_name, method = %method, "notification acknowledged");
            return Ok(Outcome::Acknowledged);
        }

        let outcome = match method {
            "initialize" => {
                let init = InitializeResult::for_server(
                    format!("{provider_name}-mcp-server"),
                    SERVER_VERSION,
                );
                Outcome::Success(to_value(&init)?)
            }
            "ping" => Outcome::Success(json!({ "status": "pong" })),
            "tools/list" => {
                let tools = provider.list_tools().await?;
                Outcome::Success(to_value(&ToolsListResult { tools })?)
            }
            "tools/call" => self.call_tool(provider.as_ref(), params).await?,
            "resources/list" => {
                let resources = provider.list_resources().await?;
                Outcome::Success(to_value(&ResourcesListResult { resources })?)
            }
            "resources/read" => self.read_resource(provider.as_ref(), params).await?,
            other => return Err(DispatchError::MethodNotSupported(other.to_string())),
        };

        Ok(outcome)
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, DispatchError> {
    serde_json::to_value(value).map_err(|e| DispatchError::Internal(e.to_string()))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
