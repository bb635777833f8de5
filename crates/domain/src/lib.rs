//! `pool-domain`: configuration and shared error types for the MCP pool
//! gateway.

pub mod config;
pub mod error;
