//! Per-session protocol server
//!
//! Routes JSON-RPC methods onto the capability registry. One instance is
//! created for every session and refuses to dispatch once closed.

use super::helpers::{rpc_error, rpc_success};
use super::models::*;
use super::registry::SharedRegistry;
use crate::error::{ProtocolError, SessionError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Protocol server bound to the shared registry.
#[derive(Debug)]
pub struct McpServer {
    registry: SharedRegistry,
    closed: AtomicBool,
}

impl McpServer {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            closed: AtomicBool::new(false),
        }
    }

    /// Marks the server closed. Safe to call more than once.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Handles one message. Returns the response envelope for requests and
    /// `None` for notifications and client responses.
    pub fn handle_message(&self, message: JsonRpcMessage) -> Result<Option<Value>, SessionError> {
        if self.is_closed() {
            return Err(SessionError::ServerClosed);
        }

        let is_request = message.is_request();
        let (Some(method), Some(id)) = (message.method, message.id) else {
            return Ok(None);
        };
        if !is_request {
            debug!(method = %method, "Notification received");
            return Ok(None);
        }

        debug!(method = %method, id = %id, "MCP call");

        let params = message.params.unwrap_or(Value::Null);
        let envelope = match self.dispatch(&method, &params) {
            Ok(result) => rpc_success(id, result),
            Err(e) => {
                if matches!(e, ProtocolError::MethodNotFound) {
                    warn!(method = %method, "Unknown method");
                }
                rpc_error(id, e.code(), e.to_string())
            }
        };
        Ok(Some(envelope))
    }

    fn dispatch(&self, method: &str, params: &Value) -> Result<Value, ProtocolError> {
        match method {
            "initialize" => Ok(self.initialize(params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.registry.list_tools()),
            "tools/call" => self.call_tool(params),
            "resources/list" => Ok(self.registry.list_resources()),
            "resources/templates/list" => Ok(json!({ "resourceTemplates": [] })),
            "resources/read" => self.read_resource(params),
            _ => Err(ProtocolError::MethodNotFound),
        }
    }

    /// Handles `initialize`: agrees on a protocol version and advertises
    /// the tool and resource capabilities.
    fn initialize(&self, params: &Value) -> Value {
        let requested = params.get("protocolVersion").and_then(Value::as_str);
        let version = requested
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(v))
            .unwrap_or(LATEST_PROTOCOL_VERSION);

        json!({
            "protocolVersion": version,
            "capabilities": {
                "tools": { "listChanged": true },
                "resources": { "listChanged": true }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn call_tool(&self, params: &Value) -> Result<Value, ProtocolError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::InvalidParams("tool name is required"))?;
        let args = params.get("arguments").unwrap_or(&Value::Null);

        let kind = self.registry.tool(name)?;
        self.registry.call_tool(kind, args)
    }

    fn read_resource(&self, params: &Value) -> Result<Value, ProtocolError> {
        let uri = params
            .get("uri")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::InvalidParams("resource uri is required"))?;

        let kind = self.registry.resource(uri)?;
        Ok(json!(self.registry.read_resource(kind)))
    }
}
