//! Input schema for `search_articles`.
//!
//! Validation runs before the tool handler and rejects malformed arguments
//! with an `ArgumentError`. A missing or empty query is a schema violation
//! too, but it is the one violation the server answers with a normal reply;
//! see [`ArgumentError::into_blank_query`].

use super::models::{SearchArgs, MAX_SIZE, MIN_SIZE};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Reasons tool arguments fail validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("Invalid arguments: expected an object")]
    NotAnObject,

    #[error("Invalid arguments: query is required")]
    MissingQuery { size: Option<u8> },

    #[error("Invalid arguments: query must contain at least 1 character")]
    EmptyQuery { size: Option<u8> },

    #[error("Invalid arguments: query must be a string")]
    QueryNotString,

    #[error("Invalid arguments: size must be an integer")]
    SizeNotInteger,

    #[error("Invalid arguments: size must be between 1 and 100, got {0}")]
    SizeOutOfRange(f64),
}

impl ArgumentError {
    /// Converts a missing or empty query into arguments carrying an empty
    /// query, so the handler can answer with its diagnostic message.
    /// Every other violation is returned unchanged.
    pub fn into_blank_query(self) -> Result<SearchArgs, Self> {
        match self {
            Self::MissingQuery { size } | Self::EmptyQuery { size } => Ok(SearchArgs {
                query: Some(String::new()),
                size,
            }),
            other => Err(other),
        }
    }
}

/// JSON Schema advertised in `tools/list`.
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "minLength": 1,
                "description": "Search terms"
            },
            "size": {
                "type": "integer",
                "minimum": MIN_SIZE,
                "maximum": MAX_SIZE,
                "description": "Maximum number of results (default 50)"
            }
        },
        "required": ["query"],
        "additionalProperties": false,
        "$schema": "http://json-schema.org/draft-07/schema#"
    })
}

/// Validates raw `tools/call` arguments against [`input_schema`].
///
/// `size` is checked before `query` so a query violation can still report
/// the validated size. An explicit `null` is a wrong type, not an absent
/// field. Unknown properties are ignored.
pub fn validate(args: &Value) -> Result<SearchArgs, ArgumentError> {
    let empty = Map::new();
    let object = match args {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => return Err(ArgumentError::NotAnObject),
    };

    let size = match object.get("size") {
        None => None,
        Some(value) => Some(validate_size(value)?),
    };

    match object.get("query") {
        None => Err(ArgumentError::MissingQuery { size }),
        Some(Value::String(query)) if query.is_empty() => Err(ArgumentError::EmptyQuery { size }),
        Some(Value::String(query)) => Ok(SearchArgs {
            query: Some(query.clone()),
            size,
        }),
        Some(_) => Err(ArgumentError::QueryNotString),
    }
}

fn validate_size(value: &Value) -> Result<u8, ArgumentError> {
    let number = value.as_f64().ok_or(ArgumentError::SizeNotInteger)?;
    if number.fract() != 0.0 {
        return Err(ArgumentError::SizeNotInteger);
    }
    if number < f64::from(MIN_SIZE) || number > f64::from(MAX_SIZE) {
        return Err(ArgumentError::SizeOutOfRange(number));
    }
    // In range and integral, so the cast is exact.
    Ok(number as u8)
}
