//! touchmcp - file creation as a Model Context Protocol tool
//!
//! A stdio MCP server exposing one tool, `touch_file`, which joins a
//! destination directory and a file name and creates (or truncates) an
//! empty file at the result.
//!
//! # Architecture
//!
//! - **protocol**: JSON-RPC 2.0 framing and MCP wire types
//! - **tools**: the tool lookup table and the filesystem implementation
//! - **server**: request routing and the stdio transport loop
//! - **telemetry**: stderr diagnostics

pub mod errors;
pub mod protocol;
pub mod server;
pub mod telemetry;
pub mod tools;

// Re-export commonly used types
pub use errors::{Result, ServerError};
