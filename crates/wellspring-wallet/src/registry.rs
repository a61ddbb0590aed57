//! Wallet registry: an ordered collection of derived identities.
//!
//! The registry owns the active mnemonic, the next derivation index, and the
//! wallet list. Wallets are append-only snapshots of a derivation: deleting
//! one never renumbers the rest, and `next_index` never moves backwards, so
//! an id is never handed out twice in a registry's lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use wellspring_core::encoding;
use wellspring_core::keypair::Keypair;

use crate::derivation;
use crate::error::WalletError;
use crate::mnemonic;
use crate::store::{RegistrySnapshot, SnapshotStore};

/// A single derived identity.
///
/// Self-contained: both keys are display-encoded strings, so a record stays
/// meaningful even if the registry's mnemonic later changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WalletRecord {
    /// Derivation index this wallet was minted at. Unique for the lifetime
    /// of the registry.
    pub id: u32,
    /// Base58 form of the 32-byte public key.
    pub public_key: String,
    /// Base58 form of the 64-byte keypair encoding.
    pub private_key: String,
}

/// In-memory wallet registry backed by a [`SnapshotStore`].
///
/// Mutations apply in memory first and then persist the full snapshot. When
/// persistence fails the in-memory state stays authoritative; callers can
/// retry with [`Registry::persist`] once the store recovers.
pub struct Registry {
    mnemonic: Option<String>,
    next_index: u32,
    wallets: Vec<WalletRecord>,
}

impl Registry {
    /// Create an empty registry with no mnemonic.
    pub fn new() -> Self {
        Self {
            mnemonic: None,
            next_index: 0,
            wallets: Vec::new(),
        }
    }

    /// Load a registry from the store, or start empty when nothing was saved.
    pub fn load(store: &dyn SnapshotStore) -> Result<Self, WalletError> {
        let mut registry = Self::new();
        match store.load()? {
            Some(snapshot) => {
                registry.restore(snapshot);
                debug!(
                    wallets = registry.wallets.len(),
                    next_index = registry.next_index,
                    "restored registry snapshot"
                );
            }
            None => debug!("no snapshot found; starting empty"),
        }
        Ok(registry)
    }

    /// Validate a phrase and make it the active mnemonic.
    ///
    /// The phrase is stored in normalized form: single spaces, lowercase.
    /// Existing wallets are untouched; they carry their own key strings.
    pub fn set_mnemonic(&mut self, phrase: &str) -> Result<(), WalletError> {
        mnemonic::check(phrase).map_err(WalletError::InvalidMnemonic)?;
        self.mnemonic = Some(mnemonic::normalize(phrase));
        info!("set active mnemonic");
        Ok(())
    }

    /// Generate a fresh mnemonic and make it active.
    pub fn generate_mnemonic(&mut self) -> String {
        let phrase = mnemonic::generate();
        self.mnemonic = Some(phrase.clone());
        info!("generated new mnemonic");
        phrase
    }

    /// The active mnemonic phrase, if set.
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    /// Derive the wallet at the next index, append it, and persist.
    ///
    /// On a persistence failure the wallet is still added and `next_index`
    /// still advances; only the store write is reported as failed.
    pub fn add_wallet(&mut self, store: &dyn SnapshotStore) -> Result<WalletRecord, WalletError> {
        let phrase = self.mnemonic.as_deref().ok_or(WalletError::NoMnemonic)?;
        // A restored snapshot can carry an arbitrary phrase.
        mnemonic::check(phrase).map_err(WalletError::InvalidMnemonic)?;

        let index = self.next_index;
        let seed = mnemonic::to_seed(phrase, "");
        let node = derivation::derive_account(&seed, index)?;
        let keypair = Keypair::from_key_material(node.key_material());

        let record = WalletRecord {
            id: index,
            public_key: encoding::encode_public(&keypair.public_key().to_bytes()),
            private_key: encoding::encode_private(&keypair.to_keypair_bytes()),
        };

        self.wallets.push(record.clone());
        self.next_index = self.next_index.saturating_add(1);
        info!(id = index, path = %derivation::path_for(index), "derived wallet");

        self.persist(store)?;
        Ok(record)
    }

    /// Remove the wallet with the given id.
    ///
    /// Returns whether a wallet was removed. Removing an absent id is a
    /// no-op, not an error, and skips the store write. `next_index` is
    /// unaffected either way.
    pub fn delete_wallet(
        &mut self,
        store: &dyn SnapshotStore,
        id: u32,
    ) -> Result<bool, WalletError> {
        let before = self.wallets.len();
        self.wallets.retain(|w| w.id != id);
        if self.wallets.len() == before {
            return Ok(false);
        }
        info!(id, remaining = self.wallets.len(), "deleted wallet");
        self.persist(store)?;
        Ok(true)
    }

    /// The wallet with the given id, if present.
    pub fn wallet(&self, id: u32) -> Option<&WalletRecord> {
        self.wallets.iter().find(|w| w.id == id)
    }

    /// All wallets in creation order.
    pub fn wallets(&self) -> &[WalletRecord] {
        &self.wallets
    }

    /// The index the next added wallet will use.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Replace in-memory state from a snapshot.
    pub fn restore(&mut self, snapshot: RegistrySnapshot) {
        self.mnemonic = snapshot.mnemonic;
        self.next_index = snapshot.next_index;
        self.wallets = snapshot.wallets;
    }

    /// Export the current state as a snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            mnemonic: self.mnemonic.clone(),
            next_index: self.next_index,
            wallets: self.wallets.clone(),
        }
    }

    /// Write the current snapshot to the store.
    pub fn persist(&self, store: &dyn SnapshotStore) -> Result<(), WalletError> {
        store.save(&self.snapshot())
    }

    /// Drop the mnemonic and every wallet, and erase the stored snapshot.
    ///
    /// After a reset the registry is indistinguishable from a new one:
    /// the next added wallet starts again at id 0.
    pub fn reset(&mut self, store: &dyn SnapshotStore) -> Result<(), WalletError> {
        self.mnemonic = None;
        self.next_index = 0;
        self.wallets.clear();
        info!("reset registry");
        store.clear()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("has_mnemonic", &self.mnemonic.is_some())
            .field("next_index", &self.next_index)
            .field("wallets", &self.wallets.len())
            .finish()
    }
}
