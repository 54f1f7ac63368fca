//! Error types for the search server.
//!
//! Startup failures (`AssetError`) stop the process before it listens.
//! Per-request infrastructure failures (`SessionError`) are caught at the
//! session boundary and become HTTP 500 responses. Argument and lookup
//! errors never leave the protocol layer: they are written back as
//! JSON-RPC error envelopes.

use std::path::PathBuf;

use thiserror::Error;

use crate::mcp::models::{INVALID_PARAMS, METHOD_NOT_FOUND};
use crate::search::ArgumentError;

/// Errors raised while loading the widget assets at startup.
#[derive(Error, Debug)]
pub enum AssetError {
    /// An asset file could not be read.
    #[error("failed to read widget asset: {path}")]
    Read {
        /// Path of the asset that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Infrastructure failures inside a single protocol session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A dispatch was attempted after the server began tearing down.
    #[error("protocol server is closed")]
    ServerClosed,

    /// The transport was used after it was released.
    #[error("transport is closed")]
    TransportClosed,

    /// `handle` was called on a transport with no server bound to it.
    #[error("transport is not connected to a server")]
    NotConnected,

    /// The request body could not be read off the connection.
    #[error("failed to read request body: {0}")]
    Body(String),

    /// Handling the request panicked.
    #[error("request handling panicked: {0}")]
    Panic(String),
}

/// Typed "not found" results from the capability registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No tool is registered under the requested name.
    #[error("Tool {0} not found")]
    UnknownTool(String),

    /// No resource is registered under the requested URI.
    #[error("Resource {0} not found")]
    UnknownResource(String),
}

/// Failures of a single JSON-RPC request, answered with an error envelope.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("Method not found")]
    MethodNotFound,

    #[error("Invalid params: {0}")]
    InvalidParams(&'static str),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Arguments(#[from] ArgumentError),
}

impl ProtocolError {
    /// JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            Self::MethodNotFound => METHOD_NOT_FOUND,
            Self::InvalidParams(_) | Self::Lookup(_) | Self::Arguments(_) => INVALID_PARAMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_codes() {
        assert_eq!(ProtocolError::MethodNotFound.code(), -32601);
        assert_eq!(
            ProtocolError::from(LookupError::UnknownTool("x".into())).code(),
            -32602
        );
        assert_eq!(
            ProtocolError::from(ArgumentError::SizeNotInteger).to_string(),
            "Invalid arguments: size must be an integer"
        );
    }

    #[test]
    fn asset_error_display_names_path() {
        let error = AssetError::Read {
            path: PathBuf::from("/srv/assets/search.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.to_string().contains("search.css"));
    }

    #[test]
    fn lookup_error_display() {
        let error = LookupError::UnknownTool("fetch_article".into());
        assert_eq!(error.to_string(), "Tool fetch_article not found");

        let error = LookupError::UnknownResource("ui://widget/other.html".into());
        assert_eq!(error.to_string(), "Resource ui://widget/other.html not found");
    }
}
