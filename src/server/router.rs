//! Request dispatch
//!
//! Routes one decoded JSON-RPC request to its handler and produces at
//! most one response. Notifications are consumed silently. Method names
//! and error codes follow the MCP stdio convention: protocol-level
//! rejections become JSON-RPC errors, while a tool that fails while
//! running reports through `CallToolResult::error` in an otherwise
//! successful response.

use crate::errors::ServerError;
use crate::protocol::jsonrpc::{error_codes, Request, Response, VERSION};
use crate::protocol::mcp::{
    CallToolParams, CallToolResult, InitializeResult, ListPromptsResult, ListResourcesResult,
    ListToolsResult, ToolDescriptor,
};
use crate::server::Server;
use serde_json::{json, Value};

/// Handle one request, returning `None` for notifications
pub fn handle_request(server: &Server, request: Request) -> Option<Response> {
    let id = request.id.clone();

    if request.jsonrpc != VERSION {
        return Some(Response::error(
            id,
            error_codes::INVALID_REQUEST,
            "Invalid jsonrpc version",
        ));
    }

    match request.method.as_str() {
        "initialize" => Some(Response::result(
            id,
            json!(InitializeResult::new(server.server_info())),
        )),
        "notifications/initialized" | "initialized" => None,
        "notifications/cancelled" | "cancelled" => None,
        "tools/list" => Some(Response::result(id, json!(list_tools(server)))),
        "tools/call" => Some(call_tool(server, id, request.params)),
        "resources/list" => Some(Response::result(
            id,
            json!(ListResourcesResult { resources: vec![] }),
        )),
        "prompts/list" => Some(Response::result(
            id,
            json!(ListPromptsResult { prompts: vec![] }),
        )),
        other => Some(Response::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method '{other}' not found"),
        )),
    }
}

/// Descriptors for every registered tool
fn list_tools(server: &Server) -> ListToolsResult {
    let tools = server
        .registry()
        .schemas()
        .into_iter()
        .map(|schema| ToolDescriptor {
            name: schema.name.clone(),
            description: schema.description.clone(),
            input_schema: schema.parameters.clone(),
        })
        .collect();

    ListToolsResult { tools }
}

/// Resolve and invoke a tool through the registry
fn call_tool(server: &Server, id: Option<Value>, params: Option<Value>) -> Response {
    let Some(params) = params else {
        return Response::error(
            id,
            error_codes::INVALID_PARAMS,
            "Missing 'params' for 'tools/call'",
        );
    };

    let params: CallToolParams = match serde_json::from_value(params) {
        Ok(params) => params,
        Err(e) => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Failed to parse 'tools/call' params: {e}"),
            );
        }
    };

    let Some(tool) = server.registry().get(&params.name) else {
        return Response::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Tool '{}' not found", params.name),
        );
    };

    let Some(arguments) = params.arguments else {
        return Response::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("Missing 'arguments' for '{}'", params.name),
        );
    };

    match (tool.handler)(&arguments) {
        Ok(text) => {
            tracing::debug!(tool = %params.name, "tool call succeeded");
            Response::result(id, json!(CallToolResult::text(text)))
        }
        Err(err @ ServerError::InvalidParams(_)) => {
            Response::error(id, err.jsonrpc_code(), err.to_string())
        }
        Err(err) => {
            tracing::debug!(tool = %params.name, error = %err, "tool call failed");
            Response::result(id, json!(CallToolResult::error(err.to_string())))
        }
    }
}
