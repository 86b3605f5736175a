//! Durable session storage
//!
//! One serialized record under a fixed key, read at startup and rewritten on
//! every credential mutation. The backend of choice is a JSON file; tests
//! inject the in-memory variant.

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::permissions::PermissionSet;
use crate::auth::roles::Role;
use crate::auth::session::Identity;

/// The persisted shape of a session. Field names match the record the
/// backend-facing clients have always written, so existing records stay
/// readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Storage failure. Callers treat these as non-fatal: the in-memory session
/// stays authoritative for the page lifetime.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable backing store for the single session record.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>, StorageError>;
    fn save(&self, record: &StoredSession) -> Result<(), StorageError>;
    fn delete(&self) -> Result<(), StorageError>;
}

/// JSON file storage, the durable backend for real runs.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<StoredSession>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record = serde_json::from_slice(&bytes)?;
        Ok(Some(record))
    }

    fn save(&self, record: &StoredSession) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory storage for tests. Counts writes so migration idempotency can
/// be asserted.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    record: Mutex<Option<StoredSession>>,
    saves: Mutex<usize>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: StoredSession) -> Self {
        Self {
            record: Mutex::new(Some(record)),
            saves: Mutex::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }

    pub fn current(&self) -> Option<StoredSession> {
        self.record.lock().clone()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<StoredSession>, StorageError> {
        Ok(self.record.lock().clone())
    }

    fn save(&self, record: &StoredSession) -> Result<(), StorageError> {
        *self.record.lock() = Some(record.clone());
        *self.saves.lock() += 1;
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        *self.record.lock() = None;
        Ok(())
    }
}
