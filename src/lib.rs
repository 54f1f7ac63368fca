//! Boston Globe Search Library
//!
//! This library provides an MCP (Model Context Protocol) server that exposes
//! a single `search_articles` tool and the search widget resource used by
//! OpenAI Apps SDK clients.

// Domain modules
pub mod search;
pub mod widget;

// Protocol
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
