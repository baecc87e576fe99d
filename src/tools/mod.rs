//! Tool registration and implementations
//!
//! Tools are plain functions registered by name and description into a
//! lookup table; the server's router resolves a `tools/call` name through
//! the table and forwards the raw arguments object.

pub mod implementations;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use registry::{RegisteredTool, ToolRegistry};
pub use types::{ToolHandler, ToolSchema};
