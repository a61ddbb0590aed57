//! Base58 display encoding for key material.
//!
//! Keys travel through the registry and its snapshots as base58 strings in
//! the Bitcoin alphabet (no `0`, `O`, `I`, or `l`): 32-byte public keys and
//! 64-byte keypair encodings. Decoding checks both the alphabet and the
//! exact byte length, so a public-key string can never be mistaken for a
//! private-key string.

use crate::constants::{KEY_BYTES, KEYPAIR_BYTES};
use crate::error::EncodingError;

/// Encode a 32-byte public key for display.
pub fn encode_public(bytes: &[u8; KEY_BYTES]) -> String {
    bs58::encode(bytes).into_string()
}

/// Encode a 64-byte keypair (secret followed by public key) for display.
pub fn encode_private(bytes: &[u8; KEYPAIR_BYTES]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a base58 public-key string back to its 32 bytes.
pub fn decode_public(s: &str) -> Result<[u8; KEY_BYTES], EncodingError> {
    decode_exact(s)
}

/// Decode a base58 keypair string back to its 64 bytes.
pub fn decode_private(s: &str) -> Result<[u8; KEYPAIR_BYTES], EncodingError> {
    decode_exact(s)
}

// --- Decoding internals ---

fn decode_exact<const N: usize>(s: &str) -> Result<[u8; N], EncodingError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(map_decode_error)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| EncodingError::InvalidLength { got, expected: N })
}

fn map_decode_error(err: bs58::decode::Error) -> EncodingError {
    match err {
        bs58::decode::Error::InvalidCharacter { character, .. } => {
            EncodingError::InvalidCharacter(character)
        }
        other => EncodingError::Malformed(other.to_string()),
    }
}
