//! # wellspring-wallet — deterministic HD wallet engine.
//!
//! Turns a 12-word mnemonic into an ordered, persistent collection of
//! Ed25519 identities. The pipeline is mnemonic → 64-byte seed (PBKDF2) →
//! SLIP-0010 hardened derivation at `m/44'/501'/index'/0'` → keypair →
//! base58 display strings, and every stage is deterministic: the same
//! phrase and index always produce the same wallet.
//!
//! # Modules
//!
//! - [`error`] — `WalletError` enum
//! - [`mnemonic`] — phrase generation, validation, and seed stretching
//! - [`derivation`] — SLIP-0010 hardened derivation for Ed25519
//! - [`registry`] — the wallet collection with add/delete/restore
//! - [`store`] — snapshot persistence trait and the file-backed store

pub mod derivation;
pub mod error;
pub mod mnemonic;
pub mod registry;
pub mod store;

// Re-exports for convenient access
pub use error::WalletError;
pub use mnemonic::Seed;
pub use registry::{Registry, WalletRecord};
pub use store::{FileStore, RegistrySnapshot, SnapshotStore};
