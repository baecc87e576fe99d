//! Error types for the touch MCP server
//!
//! One enum covers transport, decoding, and protocol rejections. Tool
//! handlers never classify failures: a filesystem error surfaces through
//! the `Io` conversion exactly as the OS reported it.

use crate::protocol::jsonrpc::error_codes;
use thiserror::Error;

/// Main error type for the server
#[derive(Error, Debug)]
pub enum ServerError {
    /// I/O errors, from the transport or from a tool's filesystem call
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request rejected before dispatch (wrong jsonrpc version)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Parameters missing or of the wrong shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Method not part of the protocol surface
    #[error("Method '{0}' not found")]
    MethodNotFound(String),

    /// Tool name not present in the registry
    #[error("Tool '{0}' not found")]
    UnknownTool(String),
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

impl ServerError {
    /// JSON-RPC error code this failure maps to at the wire boundary
    pub fn jsonrpc_code(&self) -> i32 {
        match self {
            ServerError::Json(_) => error_codes::PARSE_ERROR,
            ServerError::InvalidRequest(_) => error_codes::INVALID_REQUEST,
            ServerError::InvalidParams(_) => error_codes::INVALID_PARAMS,
            ServerError::MethodNotFound(_) | ServerError::UnknownTool(_) => {
                error_codes::METHOD_NOT_FOUND
            }
            ServerError::Io(_) => error_codes::INTERNAL_ERROR,
        }
    }
}
