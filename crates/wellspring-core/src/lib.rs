//! # wellspring-core
//!
//! Key and encoding primitives for the Wellspring wallet engine: Ed25519
//! keypairs built from derived key material, base58 display encoding, and
//! the protocol constants shared by every crate in the workspace.

pub mod constants;
pub mod encoding;
pub mod error;
pub mod keypair;
