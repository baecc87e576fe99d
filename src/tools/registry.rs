//! Tool registry with JSON schemas
//!
//! Maintains the name-to-function lookup table the router dispatches
//! through. Each registration pairs a schema (name, description,
//! parameter JSON Schema) with its handler.
//!
//! Tools:
//! - touch_file: Create an empty file at a caller-specified path

use crate::tools::implementations;
use crate::tools::types::{ToolHandler, ToolSchema};
use serde_json::json;
use std::collections::HashMap;

/// A schema paired with the function the router invokes for it
#[derive(Debug, Clone)]
pub struct RegisteredTool {
    pub schema: ToolSchema,
    pub handler: ToolHandler,
}

/// Tool registry
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to registration
    tools: HashMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Create new tool registry with the built-in tools
    pub fn new() -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };

        registry.register_touch_file();

        registry
    }

    /// Register touch_file tool
    fn register_touch_file(&mut self) {
        let schema = ToolSchema::new(
            "touch_file",
            "Create a new file",
            json!({
                "type": "object",
                "properties": {
                    "file": {
                        "type": "string",
                        "description": "Name of the file to create"
                    },
                    "destPath": {
                        "type": "string",
                        "description": "Directory the file is created in"
                    }
                },
                "required": ["file", "destPath"]
            }),
        );
        self.register(schema, implementations::touch_file);
    }

    /// Register a tool under its schema's name
    pub fn register(&mut self, schema: ToolSchema, handler: ToolHandler) {
        self.tools
            .insert(schema.name.clone(), RegisteredTool { schema, handler });
    }

    /// Get a registration by name
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    /// Check if tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all tool schemas
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        self.tools.values().map(|tool| &tool.schema).collect()
    }

    /// Get total number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use serde_json::Value;

    fn noop_handler(_args: &Value) -> Result<String> {
        Ok("ok".to_string())
    }

    #[test]
    fn test_registry_creation() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_touch_file_registered() {
        let registry = ToolRegistry::new();

        assert!(registry.contains("touch_file"));
        let tool = registry.get("touch_file").unwrap();
        assert_eq!(tool.schema.description, "Create a new file");
    }

    #[test]
    fn test_touch_file_schema_shape() {
        let registry = ToolRegistry::new();
        let schema = &registry.get("touch_file").unwrap().schema;

        let properties = &schema.parameters["properties"];
        assert!(properties.get("file").is_some());
        assert!(properties.get("destPath").is_some());

        let required = schema.parameters["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_register_additional_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolSchema::new("noop", "Does nothing", serde_json::json!({"type": "object"})),
            noop_handler,
        );

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("noop"));

        let result = (registry.get("noop").unwrap().handler)(&serde_json::json!({}));
        assert_eq!(result.unwrap(), "ok");
    }

    #[test]
    fn test_nonexistent_tool() {
        let registry = ToolRegistry::new();

        assert!(!registry.contains("nonexistent_tool"));
        assert!(registry.get("nonexistent_tool").is_none());
    }

    #[test]
    fn test_tool_names_and_schemas() {
        let registry = ToolRegistry::new();

        assert_eq!(registry.tool_names(), vec!["touch_file".to_string()]);

        for schema in registry.schemas() {
            assert!(!schema.name.is_empty());
            assert!(!schema.description.is_empty());
        }
    }
}
