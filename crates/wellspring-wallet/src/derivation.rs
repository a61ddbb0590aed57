//! SLIP-0010 hardened key derivation for Ed25519.
//!
//! Every wallet sits at `m/44'/501'/account'/0'`: one account index per
//! wallet, change level pinned to zero. Ed25519 has no normal (non-hardened)
//! derivation, so the hardened bit is applied to every level and logical
//! indices that already carry it are rejected.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use wellspring_core::constants::{CHANGE, COIN_TYPE, HARDENED_OFFSET, PURPOSE};

use crate::error::WalletError;
use crate::mnemonic::Seed;

type HmacSha512 = Hmac<Sha512>;

/// Domain-separation key for the Ed25519 master node.
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// A node in the derivation tree: 32 bytes of key material plus the chain
/// code that feeds child derivation. Both halves zeroize on drop.
pub struct ExtendedKey {
    key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl ExtendedKey {
    /// Compute the master node from a binary seed.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY)
            .expect("HMAC-SHA512 accepts keys of any length");
        mac.update(seed);
        Self::split(&mac.finalize().into_bytes())
    }

    /// Derive the hardened child at a logical index.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, WalletError> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::InvalidIndex(index));
        }
        let hardened = index | HARDENED_OFFSET;
        let mut mac = HmacSha512::new_from_slice(&*self.chain_code)
            .expect("HMAC-SHA512 accepts keys of any length");
        mac.update(&[0x00]);
        mac.update(&*self.key);
        mac.update(&hardened.to_be_bytes());
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// The 32 bytes of key material at this node.
    pub fn key_material(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 32-byte chain code at this node.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    fn split(digest: &[u8]) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);
        Self { key, chain_code }
    }
}

/// Walk `m/44'/501'/account'/0'` and return the account node.
pub fn derive_account(seed: &Seed, account: u32) -> Result<ExtendedKey, WalletError> {
    ExtendedKey::from_seed(seed.as_bytes())
        .derive_hardened(PURPOSE)?
        .derive_hardened(COIN_TYPE)?
        .derive_hardened(account)?
        .derive_hardened(CHANGE)
}

/// Render the derivation path for an account index.
pub fn path_for(account: u32) -> String {
    format!("m/{PURPOSE}'/{COIN_TYPE}'/{account}'/{CHANGE}'")
}
