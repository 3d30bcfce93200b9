//! Structured error types for pagegrid.
//!
//! The geometric core never fails: unknown ids are no-ops and a full grid is
//! an empty placement result. Errors only come from the edges of the crate,
//! where JSON is parsed, items are validated before use, and the CLI talks
//! to the file system.

use thiserror::Error;

/// The unified error type returned by fallible pagegrid functions.
#[derive(Debug, Error)]
pub enum GridError {
    /// JSON input failed to parse as a layout document or item list.
    #[error("Failed to parse layout: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// An item has a geometry the engine cannot work with.
    #[error("Invalid item '{id}': {reason}")]
    InvalidItem { id: String, reason: String },
    /// Two items in the same list share an id.
    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Bad command-line usage.
    #[error("Usage error: {0}")]
    Usage(String),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the layout schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        GridError::ParseError { source: e, hint }
    }
}
