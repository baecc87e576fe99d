//! Tool schema and handler types

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signature every registered tool conforms to: the raw JSON arguments
/// object in, one confirmation text out. Plain function pointers only;
/// dispatch never goes beyond the name-to-function map.
pub type ToolHandler = fn(&Value) -> Result<String>;

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// Parameter schema (JSON Schema)
    pub parameters: Value,
}

impl ToolSchema {
    /// Create new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}
