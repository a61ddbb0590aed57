//! Wallet error types.

use thiserror::Error;
use wellspring_core::error::{EncodingError, KeyError};

/// Errors that can occur during wallet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The phrase failed validation: wrong word count or a word outside
    /// the English wordlist.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// An operation that needs a mnemonic ran before one was set.
    #[error("no mnemonic set")]
    NoMnemonic,

    /// Derivation index at or above the hardened ceiling of 2^31.
    #[error("derivation index {0} out of range")]
    InvalidIndex(u32),

    /// The snapshot store failed to read, write, or clear.
    ///
    /// Recoverable: the in-memory registry stays authoritative and can be
    /// re-persisted once the store is healthy again.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// A snapshot could not be serialized or deserialized.
    #[error("serialization failure: {0}")]
    Serialization(String),

    /// Key handling error from the core layer.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Display-encoding error from the core layer.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
