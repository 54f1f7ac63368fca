//! `search_articles` tool handler
//!
//! The handler performs no I/O: the widget runs the actual search.

use super::helpers::{instruction_message, normalize};
use super::models::{Content, SearchArgs, SearchOutput, SearchReply, MISSING_QUERY_MESSAGE};

/// Builds the reply for one validated tool call.
///
/// A blank query is answered with a diagnostic message rather than an
/// error so the calling model receives readable guidance.
pub fn handle_search(args: SearchArgs) -> SearchReply {
    let invocation = normalize(args);

    let text = if invocation.query.is_empty() {
        MISSING_QUERY_MESSAGE.to_string()
    } else {
        instruction_message(&invocation.query, invocation.size)
    };

    SearchReply {
        content: vec![Content::Text { text }],
        structured_content: SearchOutput {
            query: invocation.query,
            size: invocation.size,
        },
    }
}
