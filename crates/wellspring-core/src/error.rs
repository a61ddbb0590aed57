//! Error types for key handling and display encoding.

use thiserror::Error;

/// Errors from keypair construction, signing, and verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid public key bytes")]
    InvalidPublicKey,
    #[error("invalid keypair bytes")]
    InvalidKeypairBytes,
    #[error("signature verification failed")]
    VerificationFailed,
}

/// Errors from base58 display encoding and decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("invalid length: got {got} bytes, expected {expected}")]
    InvalidLength { got: usize, expected: usize },
    #[error("malformed base58 string: {0}")]
    Malformed(String),
}
