//! DocumentStore - read and parse brand documents from the data directory
//!
//! Every load re-reads and re-parses from disk. There is no cache: the
//! backing files may change between calls and a response must always
//! reflect what is on disk at call time.

use serde_json::Value;
use shared::{DocKind, DocumentNotFoundError, DocumentParseError, Result};
use std::path::{Path, PathBuf};

/// Read-only access to the four brand documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory the store reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Backing file path for a document.
    pub fn path_for(&self, kind: DocKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Load a single document.
    ///
    /// Fails with `NotFound` if the backing file is missing or unreadable,
    /// and with `Parse` if its contents are not valid JSON.
    pub fn load(&self, kind: DocKind) -> Result<Value> {
        let path = self.path_for(kind);

        let content = std::fs::read_to_string(&path).map_err(|source| DocumentNotFoundError {
            name: kind.as_str().to_string(),
            path,
            source,
        })?;

        let value = serde_json::from_str(&content).map_err(|source| DocumentParseError {
            name: kind.as_str().to_string(),
            source,
        })?;

        Ok(value)
    }

    /// Load all four documents into one composite object keyed by
    /// logical name. Fails as a whole if any single load fails; a partial
    /// composite is never returned.
    pub fn load_all(&self) -> Result<Value> {
        let mut composite = serde_json::Map::new();
        for kind in DocKind::ALL {
            composite.insert(kind.as_str().to_string(), self.load(kind)?);
        }
        Ok(Value::Object(composite))
    }
}
