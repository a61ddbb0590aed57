//! Ed25519 keypairs and public keys.
//!
//! A [`Keypair`] is built from 32 bytes of derived key material and is fully
//! deterministic: the same material always yields the same keys. There is no
//! random generation here; key material comes out of the derivation pipeline.
//! Secrets never appear in `Debug` output.

use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::constants::{KEY_BYTES, KEYPAIR_BYTES, SIGNATURE_BYTES};
use crate::error::KeyError;

/// An Ed25519 signing keypair.
///
/// The secret half is zeroized on drop by the underlying library.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Build a keypair from 32 bytes of derived key material.
    ///
    /// Construction cannot fail: any 32-byte value is a valid Ed25519 secret.
    pub fn from_key_material(bytes: &[u8; KEY_BYTES]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(bytes),
        }
    }

    /// Rebuild a keypair from its 64-byte encoding.
    ///
    /// Fails when the trailing public half does not match the secret half.
    pub fn from_keypair_bytes(bytes: &[u8; KEYPAIR_BYTES]) -> Result<Self, KeyError> {
        let signing_key =
            SigningKey::from_keypair_bytes(bytes).map_err(|_| KeyError::InvalidKeypairBytes)?;
        Ok(Self { signing_key })
    }

    /// The public half of this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// Export the 64-byte keypair encoding: secret followed by public key.
    pub fn to_keypair_bytes(&self) -> [u8; KEYPAIR_BYTES] {
        self.signing_key.to_keypair_bytes()
    }

    /// Sign a message, returning the 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_BYTES] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self::from_key_material(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// An Ed25519 public key.
#[derive(Clone)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Parse a public key from its 32-byte encoding.
    pub fn from_bytes(bytes: &[u8; KEY_BYTES]) -> Result<Self, KeyError> {
        let verifying_key =
            VerifyingKey::from_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { verifying_key })
    }

    /// The 32-byte encoding of this key.
    pub fn to_bytes(&self) -> [u8; KEY_BYTES] {
        self.verifying_key.to_bytes()
    }

    /// Verify a signature over a message.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &[u8; SIGNATURE_BYTES],
    ) -> Result<(), KeyError> {
        let signature = Signature::from_bytes(signature);
        self.verifying_key
            .verify(message, &signature)
            .map_err(|_| KeyError::VerificationFailed)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.verifying_key == other.verifying_key
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::encoding::encode_public(&self.to_bytes()))
    }
}
