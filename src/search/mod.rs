//! Search Tool Module
//!
//! This module contains the `search_articles` tool, including:
//! - Tool models and constants (arguments, reply, widget payload)
//! - Input schema and argument validation
//! - Normalization helpers and the tool handler

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod schema;

pub use handlers::handle_search;
pub use schema::{validate, ArgumentError};
