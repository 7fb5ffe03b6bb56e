pub mod defaults;

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tokio::sync::Mutex;

use crate::models::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Owns the JSON document on disk.
///
/// Every file access goes through one process-wide lock, so reads and writes
/// never interleave. There is no in-memory copy: each call re-reads the file.
pub struct DocumentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, creating the seeded default first if the file is
    /// missing and persisting any goal thresholds that had to be backfilled.
    pub async fn load(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.lock().await;
        self.load_locked().await
    }

    /// Overwrite the file with `doc`.
    pub async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.persist(doc).await
    }

    /// Load, apply `operation`, and save, all under a single lock acquisition.
    /// Nothing is written when `operation` fails.
    pub async fn update<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.load_locked().await?;
        let result = operation(&mut doc)?;
        self.persist(&doc).await?;
        Ok(result)
    }

    /// Replace whatever is on disk with the seeded default document.
    pub async fn reset(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.lock().await;
        let doc = defaults::seed_document();
        self.persist(&doc).await?;
        tracing::info!(path = %self.path.display(), "document reset to defaults");
        Ok(doc)
    }

    async fn load_locked(&self) -> Result<Document, StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;
        if !exists {
            self.persist(&defaults::seed_document()).await?;
            tracing::info!(path = %self.path.display(), "created default document");
        }

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;
        let mut doc: Document =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if doc.backfill_goals() {
            tracing::info!(path = %self.path.display(), "backfilled missing goal thresholds");
            self.persist(&doc).await?;
        }

        Ok(doc)
    }

    /// Write to a sibling temp file, then rename it over the document.
    async fn persist(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        let payload = encode(doc)?;
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, payload)
            .await
            .map_err(|source| self.write_error(source))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| self.write_error(source))?;

        tracing::debug!(path = %self.path.display(), "document saved");
        Ok(())
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Pretty-print with four-space indentation.
fn encode(doc: &Document) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer).map_err(StoreError::Encode)?;
    Ok(buf)
}
