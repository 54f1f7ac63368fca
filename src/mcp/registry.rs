//! Capability registry
//!
//! Declares the one tool and one resource this server offers. Lookups map
//! the closed set of names and URIs onto tagged handler variants; anything
//! else is a typed [`LookupError`].

use super::helpers::widget_meta;
use super::models::{ResourceDescriptor, ToolDescriptor};
use crate::error::{AssetError, LookupError, ProtocolError};
use crate::search::{self, models::*};
use crate::widget::{self, assets, ReadResourceResult};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

/// Registry shared read-only by every session.
pub type SharedRegistry = Arc<Registry>;

/// Handlers reachable through `tools/call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    SearchArticles,
}

/// Handlers reachable through `resources/read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    SearchWidget,
}

/// The server's capability set. Immutable after construction.
#[derive(Debug)]
pub struct Registry {
    tool: ToolDescriptor,
    resource: ResourceDescriptor,
    widget_body: String,
}

impl Registry {
    /// Builds the registry around an already loaded widget body.
    pub fn new(widget_body: String) -> Self {
        Self {
            tool: ToolDescriptor {
                name: TOOL_NAME,
                title: TOOL_TITLE,
                description: TOOL_DESCRIPTION,
                input_schema: search::schema::input_schema(),
                annotations: json!({ "readOnlyHint": true }),
                meta: widget_meta(),
            },
            resource: ResourceDescriptor {
                name: widget::WIDGET_NAME,
                title: "Boston Globe search widget",
                uri: widget::WIDGET_TEMPLATE_URI,
                mime_type: widget::WIDGET_MIME_TYPE,
                meta: widget::resource_meta(),
            },
            widget_body,
        }
    }

    /// Loads the widget assets from `assets_dir` and builds the registry.
    pub fn from_assets_dir(assets_dir: &Path) -> Result<Self, AssetError> {
        assets::load_widget_body(assets_dir).map(Self::new)
    }

    /// Resolves a tool name.
    pub fn tool(&self, name: &str) -> Result<ToolKind, LookupError> {
        match name {
            TOOL_NAME => Ok(ToolKind::SearchArticles),
            _ => Err(LookupError::UnknownTool(name.to_string())),
        }
    }

    /// Resolves a resource URI.
    pub fn resource(&self, uri: &str) -> Result<ResourceKind, LookupError> {
        match uri {
            widget::WIDGET_TEMPLATE_URI => Ok(ResourceKind::SearchWidget),
            _ => Err(LookupError::UnknownResource(uri.to_string())),
        }
    }

    /// Result of `tools/list`.
    pub fn list_tools(&self) -> Value {
        json!({ "tools": [self.tool] })
    }

    /// Result of `resources/list`.
    pub fn list_resources(&self) -> Value {
        json!({ "resources": [self.resource] })
    }

    /// Validates `args` and runs the tool.
    ///
    /// A missing or empty query is answered by the handler itself; every
    /// other schema violation is returned as an error.
    pub fn call_tool(&self, kind: ToolKind, args: &Value) -> Result<Value, ProtocolError> {
        match kind {
            ToolKind::SearchArticles => {
                let args = search::validate(args).or_else(|e| e.into_blank_query())?;
                let reply = search::handle_search(args);
                Ok(json!({
                    "content": reply.content,
                    "structuredContent": reply.structured_content,
                    "_meta": widget_meta()
                }))
            }
        }
    }

    /// Reads a resource.
    pub fn read_resource(&self, kind: ResourceKind) -> ReadResourceResult {
        match kind {
            ResourceKind::SearchWidget => widget::read_widget(&self.widget_body),
        }
    }
}
