//! Snapshot persistence for the wallet registry.
//!
//! The registry persists as a single JSON document, replaced wholesale on
//! every save. [`SnapshotStore`] is the storage contract; [`FileStore`]
//! implements it over one file on disk. Registry code only ever sees
//! `&dyn SnapshotStore`, so tests swap in in-memory doubles.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WalletError;
use crate::registry::WalletRecord;

/// Durable image of a registry.
///
/// Holds the active mnemonic and every private-key string, so `Debug` is
/// deliberately not implemented.
#[derive(Serialize, Deserialize, Clone)]
pub struct RegistrySnapshot {
    /// Active mnemonic phrase, if one was set.
    pub mnemonic: Option<String>,
    /// Next derivation index; counts wallets ever added.
    pub next_index: u32,
    /// Derived wallets in creation order.
    pub wallets: Vec<WalletRecord>,
}

/// Storage contract for registry snapshots.
///
/// `load` distinguishes "nothing saved yet" (`Ok(None)`) from a snapshot
/// that exists but cannot be read (`Err`). Implemented by [`FileStore`].
pub trait SnapshotStore {
    /// Read the saved snapshot, or `None` when none was ever saved.
    fn load(&self) -> Result<Option<RegistrySnapshot>, WalletError>;

    /// Replace the saved snapshot.
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), WalletError>;

    /// Remove the saved snapshot. Removing an absent snapshot is not an error.
    fn clear(&self) -> Result<(), WalletError>;
}

/// File-backed snapshot store: one JSON document at a fixed path.
///
/// Saves go through a temporary file in the same directory, synced and then
/// renamed over the destination, so a crash mid-write leaves either the old
/// snapshot or the new one on disk, never a torn file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>, WalletError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(WalletError::Persistence(e.to_string())),
        };
        let snapshot = serde_json::from_slice(&data)
            .map_err(|e| WalletError::Serialization(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), WalletError> {
        let json = serde_json::to_vec(snapshot)
            .map_err(|e| WalletError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        let mut file =
            fs::File::create(&tmp).map_err(|e| WalletError::Persistence(e.to_string()))?;
        file.write_all(&json)
            .map_err(|e| WalletError::Persistence(e.to_string()))?;
        file.sync_all()
            .map_err(|e| WalletError::Persistence(e.to_string()))?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(|e| WalletError::Persistence(e.to_string()))?;

        debug!(path = %self.path.display(), bytes = json.len(), "saved registry snapshot");
        Ok(())
    }

    fn clear(&self) -> Result<(), WalletError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WalletError::Persistence(e.to_string())),
        }
    }
}
