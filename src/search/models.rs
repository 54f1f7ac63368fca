//! Search Tool Models and Constants
//!
//! This module contains the data structures exchanged with the
//! `search_articles` tool. `SearchOutput` is the `structuredContent`
//! contract read by the widget: its field names and types are fixed.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Name of the search tool
pub const TOOL_NAME: &str = "search_articles";
/// Human readable tool title
pub const TOOL_TITLE: &str = "Search Boston Globe articles";
/// Tool description shown to the model
pub const TOOL_DESCRIPTION: &str = "Searches Boston Globe articles for a query. \
The search widget fetches and renders the results; this tool only returns the query and result count.";
/// Result count used when the caller omits `size`
pub const DEFAULT_SIZE: u8 = 50;
/// Smallest accepted `size`
pub const MIN_SIZE: u8 = 1;
/// Largest accepted `size`
pub const MAX_SIZE: u8 = 100;
/// Diagnostic returned for a blank query
pub const MISSING_QUERY_MESSAGE: &str = "Missing search query.";

// =============================================================================
// Tool Models
// =============================================================================

/// Tool arguments that passed schema validation.
///
/// `None` means the field was absent. Values that were present but invalid
/// never reach this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Raw query, untrimmed
    pub query: Option<String>,

    /// Requested result count, already within `MIN_SIZE..=MAX_SIZE`
    pub size: Option<u8>,
}

/// Normalized invocation: trimmed query and defaulted size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInvocation {
    pub query: String,
    pub size: u8,
}

/// Payload consumed by the search widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutput {
    /// Trimmed query, empty when the caller sent none
    pub query: String,

    /// Maximum number of results the widget should fetch
    pub size: u8,
}

/// A single content block of a tool reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// Result of one `search_articles` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReply {
    /// Zero or one human readable messages
    pub content: Vec<Content>,

    /// Echoed query and size for the widget
    pub structured_content: SearchOutput,
}
