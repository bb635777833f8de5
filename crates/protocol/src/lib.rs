//! `pool-protocol`: JSON-RPC 2.0 envelopes and MCP payload types shared
//! by the provider crate and the gateway.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
pub use mcp::{
    InitializeResult, ResourceContent, ResourceDescriptor, ResourcesListResult,
    ResourceReadResult, ServerInfo, ToolCallContent, ToolCallResult, ToolDescriptor,
    ToolsListResult,
};
