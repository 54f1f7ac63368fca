//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use serde_json::{json, Value};

/// Constructs the tool metadata required by the OpenAI widget system.
///
/// - `openai/outputTemplate` – URI of the widget HTML.
/// - `openai/toolInvocation/invoking` / `invoked` – status lines shown
///   while the tool runs and once it has returned.
/// - `openai/widgetAccessible` – the widget may call tools itself.
pub fn widget_meta() -> Value {
    json!({
        "openai/outputTemplate": crate::widget::WIDGET_TEMPLATE_URI,
        "openai/toolInvocation/invoking": "Searching the Boston Globe",
        "openai/toolInvocation/invoked": "Boston Globe results ready",
        "openai/widgetAccessible": true,
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}
