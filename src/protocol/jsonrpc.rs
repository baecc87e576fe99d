//! JSON-RPC 2.0 framing
//!
//! One JSON document per line in each direction. Request ids are kept as
//! raw JSON values since the standard allows numbers, strings, and null,
//! and the response must echo the id untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version string required on every frame
pub const VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Incoming request or notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,

    pub method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Absent for notifications; echoed back verbatim otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl Request {
    /// Notifications carry no id and expect no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outgoing response frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,

    pub id: Option<Value>,
}

/// Error member of a response frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Response {
    /// Build a success response echoing `id`
    pub fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Build an error response echoing `id`
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: None,
            error: Some(ErrorObject {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }

    /// Whether this frame carries an error member
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_numeric_id() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"tools/list","id":1}"#).unwrap();

        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.method, "tools/list");
        assert_eq!(req.id, Some(json!(1)));
        assert!(!req.is_notification());
    }

    #[test]
    fn test_request_with_string_id() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"initialize","id":"init-1"}"#)
                .unwrap();

        assert_eq!(req.id, Some(json!("init-1")));
    }

    #[test]
    fn test_notification_has_no_id() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();

        assert!(req.is_notification());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_success_response_omits_error() {
        let resp = Response::result(Some(json!(7)), json!({"ok": true}));
        let encoded = serde_json::to_string(&resp).unwrap();

        assert!(encoded.contains("\"result\""));
        assert!(!encoded.contains("\"error\""));
        assert!(encoded.contains("\"id\":7"));
    }

    #[test]
    fn test_error_response_omits_result() {
        let resp = Response::error(None, error_codes::PARSE_ERROR, "bad frame");
        let encoded = serde_json::to_string(&resp).unwrap();

        assert!(resp.is_error());
        assert!(encoded.contains("-32700"));
        assert!(!encoded.contains("\"result\""));
        assert!(encoded.contains("\"id\":null"));
    }

    #[test]
    fn test_error_object_round_trip() {
        let resp = Response::error(Some(json!(3)), error_codes::INVALID_PARAMS, "missing field");
        let decoded: Response = serde_json::from_str(&serde_json::to_string(&resp).unwrap()).unwrap();

        let err = decoded.error.unwrap();
        assert_eq!(err.code, error_codes::INVALID_PARAMS);
        assert_eq!(err.message, "missing field");
        assert!(err.data.is_none());
    }
}
