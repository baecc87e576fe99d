//! MCP request surface carried over JSON-RPC
//!
//! Result and parameter types for the handshake, tool listing, and tool
//! invocation methods. Field names follow the protocol's camelCase
//! convention on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Protocol revision advertised during the handshake
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Identity advertised in the `initialize` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Capability set advertised in the `initialize` response
///
/// The tools capability is an empty object; listing happens through
/// `tools/list`, not through the handshake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub tools: HashMap<String, Value>,
}

/// Result of the `initialize` method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,

    pub capabilities: Capabilities,

    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

impl InitializeResult {
    pub fn new(server_info: ServerInfo) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: Capabilities::default(),
            server_info,
        }
    }
}

/// One entry in the `tools/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,

    pub description: String,

    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of the `tools/list` method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDescriptor>,
}

/// Parameters of a `tools/call` request
#[derive(Debug, Clone, Deserialize)]
pub struct CallToolParams {
    pub name: String,

    #[serde(default)]
    pub arguments: Option<Value>,
}

/// One content block in a tool result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,

    pub text: String,
}

/// Result of a `tools/call` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,

    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    /// Successful invocation carrying one text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: None,
        }
    }

    /// Failed invocation; the failure text is the only content
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// One entry in the `resources/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub uri: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Result of the `resources/list` method; this server exposes none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResourcesResult {
    pub resources: Vec<Resource>,
}

/// One entry in the `prompts/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of the `prompts/list` method; this server exposes none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPromptsResult {
    pub prompts: Vec<Prompt>,
}
