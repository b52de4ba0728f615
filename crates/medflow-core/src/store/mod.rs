//! Persistence layer: one JSON document behind an injected storage port.
//!
//! The whole aggregate is read, modified, and rewritten on every change.
//! A corrupt document is surfaced as an error rather than silently
//! replaced; recovery goes through the explicit [`reset_to_seed`].

pub mod backup;

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ClinicData;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clinic document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("invalid backup file: {0}")]
    InvalidBackup(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The storage port: reads and writes one raw JSON document.
///
/// The fixed local-storage key of the original deployment becomes a
/// fixed document location behind this trait.
pub trait ClinicStore {
    /// Read the stored document, `None` if nothing has been written yet.
    fn read(&self) -> StoreResult<Option<String>>;

    /// Replace the stored document.
    fn write(&self, document: &str) -> StoreResult<()>;
}

/// Load the aggregate from a store.
///
/// An absent document self-seeds with the built-in defaults. A document
/// that fails to parse is reported as [`StoreError::Corrupt`] and left
/// in place; missing top-level sections in a well-formed document are
/// backfilled with defaults.
pub fn load<S: ClinicStore>(store: &S) -> StoreResult<ClinicData> {
    match store.read()? {
        None => {
            debug!("no clinic document found, seeding defaults");
            let data = ClinicData::seed();
            save(store, &data)?;
            Ok(data)
        }
        Some(document) => serde_json::from_str(&document).map_err(|e| {
            warn!(error = %e, "stored clinic document failed to parse");
            StoreError::Corrupt(e)
        }),
    }
}

/// Persist the whole aggregate.
pub fn save<S: ClinicStore>(store: &S, data: &ClinicData) -> StoreResult<()> {
    let document = serde_json::to_string(data)?;
    store.write(&document)
}

/// Replace whatever is stored with the built-in default dataset.
///
/// This is the confirmed-recovery path for a corrupt document; it is
/// never invoked implicitly.
pub fn reset_to_seed<S: ClinicStore>(store: &S) -> StoreResult<ClinicData> {
    let data = ClinicData::seed();
    save(store, &data)?;
    warn!("clinic document reset to seed dataset");
    Ok(data)
}

/// File-backed store holding the document at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClinicStore for JsonFileStore {
    fn read(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, document: &str) -> StoreResult<()> {
        fs::write(&self.path, document)?;
        Ok(())
    }
}

/// In-memory store for tests.
pub struct MemoryStore {
    document: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            document: RefCell::new(None),
        }
    }

    /// Start from a pre-existing raw document.
    pub fn with_document(document: &str) -> Self {
        Self {
            document: RefCell::new(Some(document.to_string())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicStore for MemoryStore {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(self.document.borrow().clone())
    }

    fn write(&self, document: &str) -> StoreResult<()> {
        *self.document.borrow_mut() = Some(document.to_string());
        Ok(())
    }
}
