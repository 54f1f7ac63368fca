//! Search Tool Helpers
//!
//! Pure functions turning validated arguments into a normalized invocation
//! and building the text shown to the calling model.

use super::models::{SearchArgs, SearchInvocation, DEFAULT_SIZE};

/// Trims the query and applies the default size.
///
/// An absent query becomes the empty string; emptiness is handled by the
/// caller, never represented as a missing field.
pub fn normalize(args: SearchArgs) -> SearchInvocation {
    SearchInvocation {
        query: args.query.as_deref().map(str::trim).unwrap_or_default().to_string(),
        size: args.size.unwrap_or(DEFAULT_SIZE),
    }
}

/// Instruction text for a non-empty query.
///
/// The query is embedded as a JSON string literal so quotes and control
/// characters in user input stay escaped.
pub fn instruction_message(query: &str, size: u8) -> String {
    let escaped = serde_json::to_string(query).unwrap_or_else(|_| format!("\"{query}\""));
    format!(
        "Searching Boston Globe for {escaped} with up to {size} results. \
The search widget fetches and displays the matching articles; do not summarize results until the widget has loaded them."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_query_and_defaults_size() {
        let invocation = normalize(SearchArgs {
            query: Some("  red sox \n".into()),
            size: None,
        });
        assert_eq!(invocation.query, "red sox");
        assert_eq!(invocation.size, 50);
    }

    #[test]
    fn missing_query_becomes_empty() {
        let invocation = normalize(SearchArgs::default());
        assert_eq!(invocation.query, "");
        assert_eq!(invocation.size, DEFAULT_SIZE);
    }

    #[test]
    fn explicit_size_passes_through() {
        let invocation = normalize(SearchArgs {
            query: Some("patriots".into()),
            size: Some(100),
        });
        assert_eq!(invocation.size, 100);
    }

    #[test]
    fn message_escapes_query() {
        let message = instruction_message("say \"hi\"", 5);
        assert!(message.contains(r#"for "say \"hi\"" with up to 5 results."#));
    }
}
