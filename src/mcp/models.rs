//! MCP Protocol Models and Constants
//!
//! This module contains the data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier
pub const SERVER_NAME: &str = "boston-globe-search";
/// Protocol version answered when the client asks for an unknown one
pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";
/// Protocol versions this server can speak, newest first
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] =
    &["2025-06-18", "2025-03-26", "2024-11-05", "2024-10-07"];
/// Header carrying the protocol session id; never issued in stateless mode
pub const SESSION_ID_HEADER: &str = "mcp-session-id";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
/// Transport-level rejection (wrong content type, method not allowed)
pub const SERVER_ERROR: i32 = -32000;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 message envelope.
///
/// Requests carry an `id`; notifications do not. Client responses (with
/// `result` or `error` and no `method`) are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcMessage {
    /// Protocol version (must be "2.0")
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: Option<String>,

    /// Parameters for the method
    #[serde(default)]
    pub params: Option<Value>,

    /// Request identifier
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub result: Option<Value>,

    #[serde(default)]
    pub error: Option<Value>,
}

impl JsonRpcMessage {
    /// Returns a reason when the envelope is not a valid JSON-RPC 2.0 message.
    pub fn validate(&self) -> Option<&'static str> {
        if self.jsonrpc != "2.0" {
            return Some("jsonrpc field must be \"2.0\"");
        }
        match &self.method {
            Some(method) if method.is_empty() => Some("method field cannot be empty"),
            Some(_) => None,
            None if self.result.is_some() || self.error.is_some() => None,
            None => Some("method field is required"),
        }
    }

    /// True when the message expects a response.
    pub fn is_request(&self) -> bool {
        self.method.is_some() && self.id.as_ref().is_some_and(|id| !id.is_null())
    }
}

/// A tool as advertised in `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub annotations: Value,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

/// A resource as advertised in `resources/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub uri: &'static str,
    pub mime_type: &'static str,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> JsonRpcMessage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_and_notification() {
        let request = parse(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }));
        assert!(request.validate().is_none());
        assert!(request.is_request());

        let notification = parse(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }));
        assert!(notification.validate().is_none());
        assert!(!notification.is_request());
    }

    #[test]
    fn client_response_is_valid_but_not_a_request() {
        let response = parse(json!({ "jsonrpc": "2.0", "id": 4, "result": {} }));
        assert!(response.validate().is_none());
        assert!(!response.is_request());
    }

    #[test]
    fn rejects_bad_envelopes() {
        assert!(parse(json!({ "jsonrpc": "1.0", "id": 1, "method": "ping" }))
            .validate()
            .is_some());
        assert!(parse(json!({ "jsonrpc": "2.0", "id": 1, "method": "" }))
            .validate()
            .is_some());
        assert!(parse(json!({ "jsonrpc": "2.0", "id": 1 })).validate().is_some());
    }
}
