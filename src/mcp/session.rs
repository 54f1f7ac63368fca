//! Session factory
//!
//! Every protocol request gets its own server + transport pair. The pair is
//! torn down when the exchange finishes, or when the connection goes away
//! and the request future is dropped.

use super::helpers::rpc_error;
use super::models::INTERNAL_ERROR;
use super::registry::SharedRegistry;
use super::server::McpServer;
use super::transport::HttpTransport;
use crate::error::SessionError;
use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::FutureExt;
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// One connection-scoped pairing of protocol server and transport.
#[derive(Debug)]
pub struct Session {
    /// Log correlation id; never sent to the client.
    id: Uuid,
    server: Arc<McpServer>,
    transport: HttpTransport,
    closed: bool,
}

impl Session {
    /// Creates a server bound to `registry` and connects it to a fresh
    /// stateless transport.
    pub fn open(registry: SharedRegistry) -> Result<Self, SessionError> {
        let server = Arc::new(McpServer::new(registry));
        let mut transport = HttpTransport::new();
        transport.connect(Arc::clone(&server))?;

        let id = Uuid::new_v4();
        debug!(session = %id, "Session opened");

        Ok(Self {
            id,
            server,
            transport,
            closed: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn server(&self) -> &McpServer {
        &self.server
    }

    #[cfg(test)]
    fn shared_server(&self) -> Arc<McpServer> {
        Arc::clone(&self.server)
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Hands the request to the transport.
    pub async fn handle(&self, request: Request) -> Result<Response, SessionError> {
        if self.closed {
            return Err(SessionError::ServerClosed);
        }
        self.transport.handle(request).await
    }

    /// Releases the transport, then the server. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.transport.close();
        self.server.close();
        debug!(session = %self.id, "Session closed");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

/// Serves one protocol request on a fresh session.
///
/// Failures while connecting or handling, panics included, are logged and
/// answered with a 500. The session is closed on every path.
pub async fn serve(registry: SharedRegistry, request: Request) -> Response {
    let mut session = match Session::open(registry) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "Failed to open MCP session");
            return internal_error();
        }
    };

    let outcome = AssertUnwindSafe(session.handle(request))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(SessionError::Panic(panic_message(panic.as_ref()))));

    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            error!(session = %session.id(), error = %e, "Error handling MCP request");
            internal_error()
        }
    };

    session.close();
    response
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(rpc_error(Value::Null, INTERNAL_ERROR, "Internal server error")),
    )
        .into_response()
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
