//! JSON file document store
//!
//! Persists the whole tracker document as one JSON file. Writes go to a
//! sibling `.tmp` file that is fsynced and then renamed into place, so a
//! crash mid-write never corrupts the previous document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hourglass_core::DocumentStore;
use hourglass_domain::{HourglassError, Result, TrackerDocument};
use tracing::debug;

/// File-backed [`DocumentStore`] with atomic replace semantics
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; the first [`DocumentStore::load`]
    /// returns the empty document and the first save creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_sync(path: &Path) -> Result<TrackerDocument> {
        if !path.exists() {
            debug!(path = %path.display(), "No document file yet, starting empty");
            return Ok(TrackerDocument::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            HourglassError::StoreUnavailable(format!("Failed to read document file: {e}"))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            HourglassError::StoreUnavailable(format!("Document file is corrupt: {e}"))
        })
    }

    fn save_sync(path: &Path, document: &TrackerDocument) -> Result<()> {
        let data = serde_json::to_vec_pretty(document).map_err(|e| {
            HourglassError::StoreWrite(format!("Failed to serialize document: {e}"))
        })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    HourglassError::StoreWrite(format!("Failed to create store directory: {e}"))
                })?;
            }
        }

        // Write to a temp file first, then rename over the target so the
        // previous document survives a failure at any point before the
        // rename.
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| HourglassError::StoreWrite(format!("Failed to create temp file: {e}")))?;
        file.write_all(&data)
            .map_err(|e| HourglassError::StoreWrite(format!("Failed to write document: {e}")))?;
        file.sync_all()
            .map_err(|e| HourglassError::StoreWrite(format!("Failed to sync document: {e}")))?;
        drop(file);

        fs::rename(&temp_path, path).map_err(|e| {
            HourglassError::StoreWrite(format!("Failed to replace document file: {e}"))
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Document saved");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<TrackerDocument> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| HourglassError::Internal(format!("Load task failed: {e}")))?
    }

    async fn save(&self, document: &TrackerDocument) -> Result<()> {
        let path = self.path.clone();
        let document = document.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &document))
            .await
            .map_err(|e| HourglassError::Internal(format!("Save task failed: {e}")))?
    }
}
