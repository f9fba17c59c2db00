//! Error types for seezee-mcp

use std::path::PathBuf;
use thiserror::Error;

/// Error raised when a document's backing file is missing or unreadable
#[derive(Debug, Error)]
#[error("Document '{name}' not found at {}: {source}", path.display())]
pub struct DocumentNotFoundError {
    pub name: String,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Error raised when a document's backing file is not valid JSON
#[derive(Debug, Error)]
#[error("Document '{name}' is not valid JSON: {source}")]
pub struct DocumentParseError {
    pub name: String,
    #[source]
    pub source: serde_json::Error,
}

/// Error raised when a requested tool is outside the fixed catalog
#[derive(Debug, Error)]
#[error("Unknown tool '{tool_name}'. Available tools: {}", available.join(", "))]
pub struct UnknownToolError {
    pub tool_name: String,
    pub available: Vec<String>,
}

/// General seezee-mcp error type
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    NotFound(#[from] DocumentNotFoundError),

    #[error(transparent)]
    Parse(#[from] DocumentParseError),

    #[error(transparent)]
    UnknownTool(#[from] UnknownToolError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
