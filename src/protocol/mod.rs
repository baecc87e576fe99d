//! Wire types for the stdio invocation boundary
//!
//! Two layers: JSON-RPC 2.0 framing and the MCP request surface carried
//! on top of it.

pub mod jsonrpc;
pub mod mcp;

// Re-export commonly used types
pub use jsonrpc::{ErrorObject, Request, Response};
pub use mcp::{
    CallToolParams, CallToolResult, Capabilities, InitializeResult, ListPromptsResult,
    ListResourcesResult, ListToolsResult, ServerInfo, ToolContent, ToolDescriptor,
};
