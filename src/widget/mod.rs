//! Search Widget Resource Module
//!
//! The widget is the single resource this server offers: static markup
//! that the client renders and that performs the actual article search.

pub mod assets;

use serde::Serialize;
use serde_json::{json, Value};

/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/search.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Resource name shown in `resources/list`
pub const WIDGET_NAME: &str = "search-widget";

/// Resource metadata: asks the client to draw a border around the widget.
pub fn resource_meta() -> Value {
    json!({ "openai/widgetPrefersBorder": true })
}

/// One entry of a `resources/read` result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: &'static str,
    pub mime_type: &'static str,
    pub text: String,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

/// Result of reading the widget resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadResourceResult {
    pub contents: Vec<ResourceContents>,
}

/// Returns the widget resource contents. Never fails once the body is loaded.
pub fn read_widget(body: &str) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents {
            uri: WIDGET_TEMPLATE_URI,
            mime_type: WIDGET_MIME_TYPE,
            text: body.to_string(),
            meta: resource_meta(),
        }],
    }
}
