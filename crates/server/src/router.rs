//! ToolRouter - maps tool names onto document store reads

use shared::{catalog, catalog_names, Result, Tool, ToolKind, UnknownToolError};
use store::DocumentStore;

/// The operation dispatcher: a fixed mapping from the five tool names to
/// document store reads. Stateless beyond the store it wraps.
#[derive(Debug, Clone)]
pub struct ToolRouter {
    store: DocumentStore,
}

impl ToolRouter {
    /// Create a router over a document store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The advertised tool catalog.
    pub fn list_tools(&self) -> Vec<Tool> {
        catalog()
    }

    /// Dispatch a tool call by name, returning the pretty-printed JSON
    /// payload. Loader failures propagate unchanged; a name outside the
    /// catalog fails with `UnknownTool`.
    pub fn call(&self, name: &str) -> Result<String> {
        let kind = ToolKind::from_name(name).ok_or_else(|| UnknownToolError {
            tool_name: name.to_string(),
            available: catalog_names(),
        })?;

        let value = match kind.doc() {
            Some(doc) => self.store.load(doc)?,
            None => self.store.load_all()?,
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }
}
