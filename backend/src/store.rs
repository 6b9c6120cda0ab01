use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, debug};
use shared::models::StoreDocument;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read data file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to write data file: {0}")]
    Write(#[source] std::io::Error),
    #[error("Data file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Failed to serialize store document: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Whole-document JSON persistence. Every mutation re-reads the file,
/// applies the change in memory, and rewrites the file wholesale. The mutex
/// serializes all file access across handlers, readers included, since
/// `save` is not atomic; a crash mid-write can still truncate the document
/// (no atomic rename).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Creates the data file with a default document if it does not exist
    /// yet. An existing file is left untouched.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::new(path);
        if !store.path.exists() {
            info!("Data file {} not found, creating with defaults", store.path.display());
            store.save(&StoreDocument::default())?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Takes the store mutex for the duration of a file access, whether a
    /// plain read or a full read-modify-write cycle.
    pub fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.lock.lock().map_err(|_| StoreError::LockPoisoned)
    }

    pub fn load(&self) -> Result<StoreDocument, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let doc = StoreDocument::default();
                self.save(&doc)?;
                return Ok(doc);
            }
            Err(e) => return Err(StoreError::Read(e)),
        };
        let doc = serde_json::from_str(&raw).map_err(StoreError::Parse)?;
        debug!("Loaded store document from {}", self.path.display());
        Ok(doc)
    }

    pub fn save(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;
        fs::write(&self.path, raw).map_err(StoreError::Write)?;
        debug!("Rewrote store document at {}", self.path.display());
        Ok(())
    }
}
