//! Streamable HTTP transport, stateless JSON-response mode
//!
//! Translates one HTTP request into JSON-RPC messages for the connected
//! server and writes the replies back as a single JSON body. No session id
//! is issued, and no event stream is opened.

use super::helpers::rpc_error;
use super::models::*;
use super::server::McpServer;
use crate::error::SessionError;
use axum::{
    extract::Request,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use http_body_util::LengthLimitError;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Largest request body accepted.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug)]
enum TransportState {
    Idle,
    Connected(Arc<McpServer>),
    Closed,
}

/// HTTP transport for a single session.
#[derive(Debug)]
pub struct HttpTransport {
    state: TransportState,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            state: TransportState::Idle,
        }
    }

    /// Binds `server` as the dispatch target for incoming messages.
    pub fn connect(&mut self, server: Arc<McpServer>) -> Result<(), SessionError> {
        match self.state {
            TransportState::Closed => Err(SessionError::TransportClosed),
            _ => {
                self.state = TransportState::Connected(server);
                Ok(())
            }
        }
    }

    /// Releases the server binding. Safe to call more than once.
    pub fn close(&mut self) {
        self.state = TransportState::Closed;
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, TransportState::Closed)
    }

    /// Handles one HTTP exchange.
    pub async fn handle(&self, request: Request) -> Result<Response, SessionError> {
        let server = match &self.state {
            TransportState::Connected(server) => Arc::clone(server),
            TransportState::Idle => return Err(SessionError::NotConnected),
            TransportState::Closed => return Err(SessionError::TransportClosed),
        };

        match *request.method() {
            Method::POST => self.handle_post(&server, request).await,
            Method::DELETE => Ok(StatusCode::OK.into_response()),
            _ => Ok(transport_error(
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed.",
            )),
        }
    }

    async fn handle_post(
        &self,
        server: &McpServer,
        request: Request,
    ) -> Result<Response, SessionError> {
        let (parts, body) = request.into_parts();

        if !accepts_json(&parts.headers) {
            return Ok(transport_error(
                StatusCode::NOT_ACCEPTABLE,
                "Not Acceptable: Client must accept application/json",
            ));
        }
        if !is_json_content(&parts.headers) {
            return Ok(transport_error(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Media Type: Content-Type must be application/json",
            ));
        }

        let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let e = e.into_inner();
                if e.downcast_ref::<LengthLimitError>().is_some() {
                    debug!(limit = MAX_BODY_BYTES, "Request body too large");
                    return Ok(transport_error(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "Payload Too Large: request body exceeds 4 MiB",
                    ));
                }
                return Err(SessionError::Body(e.to_string()));
            }
        };

        let messages = match parse_messages(&bytes) {
            Ok(messages) => messages,
            Err(envelope) => return Ok((StatusCode::BAD_REQUEST, Json(envelope)).into_response()),
        };
        let batch = messages.is_batch();

        let mut replies = Vec::new();
        for item in messages.into_vec() {
            match item {
                Ok(message) => replies.extend(server.handle_message(message)?),
                Err(envelope) => replies.push(envelope),
            }
        }

        debug!(replies = replies.len(), batch, "MCP exchange complete");

        if replies.is_empty() {
            return Ok(StatusCode::ACCEPTED.into_response());
        }
        let body = if batch {
            Value::Array(replies)
        } else {
            replies.swap_remove(0)
        };
        Ok(Json(body).into_response())
    }
}

/// A parsed POST body: one message or a batch.
///
/// Batch items are parsed independently; a malformed item becomes its own
/// error reply and does not affect its neighbours.
enum Messages {
    Single(JsonRpcMessage),
    Batch(Vec<Result<JsonRpcMessage, Value>>),
}

impl Messages {
    fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    fn into_vec(self) -> Vec<Result<JsonRpcMessage, Value>> {
        match self {
            Self::Single(message) => vec![Ok(message)],
            Self::Batch(messages) => messages,
        }
    }
}

/// Parses the body into messages, or returns the error envelope to send.
fn parse_messages(bytes: &[u8]) -> Result<Messages, Value> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|_| rpc_error(Value::Null, PARSE_ERROR, "Parse error"))?;

    match value {
        Value::Array(items) if items.is_empty() => {
            Err(invalid_request(Value::Null, "empty batch"))
        }
        Value::Array(items) => Ok(Messages::Batch(
            items.into_iter().map(parse_message).collect(),
        )),
        other => parse_message(other).map(Messages::Single),
    }
}

fn parse_message(value: Value) -> Result<JsonRpcMessage, Value> {
    let id = match value.get("id") {
        Some(id @ (Value::String(_) | Value::Number(_))) => id.clone(),
        _ => Value::Null,
    };
    let message: JsonRpcMessage = serde_json::from_value(value)
        .map_err(|_| invalid_request(id.clone(), "malformed message"))?;
    match message.validate() {
        Some(reason) => Err(invalid_request(id, reason)),
        None => Ok(message),
    }
}

fn invalid_request(id: Value, reason: &str) -> Value {
    rpc_error(
        id,
        INVALID_REQUEST,
        format!("Invalid Request: {reason}"),
    )
}

fn transport_error(status: StatusCode, message: &str) -> Response {
    (status, Json(rpc_error(Value::Null, SERVER_ERROR, message))).into_response()
}

/// A missing `Accept` header accepts anything.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return true;
    };
    accept.split(',').any(|range| {
        let media = range.split(';').next().unwrap_or("").trim();
        matches!(media, "application/json" | "application/*" | "*/*")
    })
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"))
}
