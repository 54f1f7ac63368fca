//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP protocol implementation, including:
//! - Protocol models (JsonRpcMessage, descriptors, constants)
//! - RPC helpers (success/error envelopes, widget metadata)
//! - The capability registry (one tool, one resource)
//! - The per-session server, the stateless HTTP transport, and the
//!   session factory that pairs them

pub mod helpers;
pub mod models;
pub mod registry;
pub mod server;
pub mod session;
pub mod transport;

// Re-export commonly used types and functions
pub use registry::{Registry, SharedRegistry};
pub use session::{serve, Session};
