use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::document::model::Document;
use crate::document::seed;
use crate::utils::error::{BoxResult, FolioError};
use crate::utils::fs::write_file_atomic;

/// Persistence of the single site document.
///
/// `load` never fabricates content: a missing or unreadable document is an
/// error. Seeding a default document is an explicit, separate step.
pub trait DocumentRepository: Send + Sync {
    /// Read the whole document
    fn load(&self) -> BoxResult<Document>;

    /// Replace the whole document
    fn save(&self, document: &Document) -> BoxResult<()>;

    /// Whether a persisted document exists yet
    fn exists(&self) -> bool;
}

/// Document persisted as pretty-printed JSON in one file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the seed document if no document exists yet.
    ///
    /// Returns true when the seed was written.
    pub fn initialize(&self) -> BoxResult<bool> {
        if self.exists() {
            debug!("Document already present at {}", self.path.display());
            return Ok(false);
        }

        info!("Seeding default document at {}", self.path.display());
        self.save(&seed::default_document())?;
        Ok(true)
    }
}

impl DocumentRepository for JsonFileStore {
    fn load(&self) -> BoxResult<Document> {
        let content = fs::read_to_string(&self.path).map_err(|e| FolioError::Document(format!(
            "Failed to read {}: {}", self.path.display(), e
        )))?;

        let document = serde_json::from_str(&content).map_err(|e| FolioError::Document(format!(
            "Malformed document {}: {}", self.path.display(), e
        )))?;

        debug!("Loaded document from {}", self.path.display());
        Ok(document)
    }

    fn save(&self, document: &Document) -> BoxResult<()> {
        let json = serde_json::to_string_pretty(document)?;
        write_file_atomic(&self.path, &json)?;
        debug!("Saved document to {}", self.path.display());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
