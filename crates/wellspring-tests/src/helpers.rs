//! Shared fixtures for the end-to-end suite.

use std::cell::RefCell;

use wellspring_wallet::WalletError;
use wellspring_wallet::store::{RegistrySnapshot, SnapshotStore};

/// The BIP-39 phrase for all-zero entropy. Checksum-valid.
pub const ZERO_ENTROPY_PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Twelve wordlist words with a wrong checksum. Still importable.
pub const CHECKSUM_INVALID_PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";

/// In-memory snapshot store for tests that do not need a real file.
#[derive(Default)]
pub struct MemoryStore {
    slot: RefCell<Option<RegistrySnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>, WalletError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), WalletError> {
        *self.slot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), WalletError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Store whose writes always fail, for persistence-failure scenarios.
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>, WalletError> {
        Ok(None)
    }

    fn save(&self, _snapshot: &RegistrySnapshot) -> Result<(), WalletError> {
        Err(WalletError::Persistence("store offline".to_string()))
    }

    fn clear(&self) -> Result<(), WalletError> {
        Err(WalletError::Persistence("store offline".to_string()))
    }
}
