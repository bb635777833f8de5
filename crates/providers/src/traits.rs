use pool_protocol::{ResourceContent, ResourceDescriptor, ToolCallResult, ToolDescriptor};
use serde_json::Value;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Failures a provider can report.
///
/// The gateway's dispatcher translates each variant into its own error
/// taxonomy; providers never need to know about JSON-RPC codes or HTTP
/// statuses.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Execution(String),
    #[error("{0}")]
    Internal(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Core provider trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A tool-provider service pooled behind the gateway.
///
/// Implementations hold no mutable shared state: the same instance serves
/// concurrent calls without locking. Operations are async so a provider can
/// perform I/O, but the built-in catalogs complete immediately.
///
/// # Example
///
/// ```rust,no_run
/// use pool_providers::{Provider, ProviderError};
/// use pool_protocol::{ResourceContent, ResourceDescriptor, ToolCallResult, ToolDescriptor};
///
/// struct Echo;
///
/// #[async_trait::async_trait]
/// impl Provider for Echo {
///     async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, ProviderError> {
///         Ok(vec![ToolDescriptor::new("echo", "Echo arguments", serde_json::json!({"type": "object"}))])
///     }
///     async fn list_resources(&self) -> Result<Vec<ResourceDescriptor>, ProviderError> {
///         Ok(Vec::new())
///     }
///     async fn read_resource(&self, uri: &str) -> Result<Vec<ResourceContent>, ProviderError> {
///         Err(ProviderError::ResourceNotFound(uri.to_string()))
///     }
///     async fn call_tool(&self, name: &str, args: serde_json::Value) -> Result<ToolCallResult, ProviderError> {
///         match name {
///             "echo" => Ok(ToolCallResult::text(args.to_string())),
///             other => Err(ProviderError::ToolNotFound(other.to_string())),
///         }
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Tools this provider offers.
    async fn list_tools(&self) -> ProviderResult<Vec<ToolDescriptor>>;

    /// Resources this provider offers.
    async fn list_resources(&self) -> ProviderResult<Vec<ResourceDescriptor>>;

    /// Read a resource by its full URI (e.g. `convex://tables`).
    async fn read_resource(&self, uri: &str) -> ProviderResult<Vec<ResourceContent>>;

    /// Execute a named tool with JSON arguments.
    async fn call_tool(&self, name: &str, arguments: Value) -> ProviderResult<ToolCallResult>;

    /// URI scheme of this provider's resources when it differs from the
    /// provider's registered name (e.g. `mui` for `material-ui`).
    fn uri_scheme(&self) -> Option<&str> {
        None
    }
}
