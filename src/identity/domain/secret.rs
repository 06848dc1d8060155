//! Access key hashing and verification.
//!
//! Uses the Argon2id variant with default parameters. The produced PHC string
//! embeds the per-record salt and cost parameters, so verification needs no
//! separate salt storage.

use super::{IdentityDomainError, SecretHashError};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated plaintext access key supplied at signup or login.
///
/// The wrapped value never leaves this type except through hashing or
/// verification; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct RawSecret(String);

impl RawSecret {
    /// Creates a validated access key.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptySecret`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(IdentityDomainError::EmptySecret);
        }
        Ok(Self(raw))
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawSecret(<redacted>)")
    }
}

/// One-way salted hash of an access key, in PHC string format.
///
/// This is the only form in which an access key is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretHash(String);

impl SecretHash {
    /// Derives a hash from a plaintext access key with a fresh random salt.
    ///
    /// Two derivations of the same secret produce different hashes.
    ///
    /// # Errors
    ///
    /// Returns [`SecretHashError::Hashing`] when the hashing primitive fails.
    pub fn derive(secret: &RawSecret) -> Result<Self, SecretHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.expose().as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|err| SecretHashError::Hashing(err.to_string()))
    }

    /// Verifies a plaintext access key against this hash.
    ///
    /// The comparison happens inside the argon2 crate and is constant-time
    /// with respect to the hash output.
    ///
    /// # Errors
    ///
    /// Returns [`SecretHashError::MalformedHash`] when the stored value is
    /// not a valid PHC string.
    pub fn verify(&self, secret: &RawSecret) -> Result<bool, SecretHashError> {
        let parsed = PasswordHash::new(&self.0)
            .map_err(|err| SecretHashError::MalformedHash(err.to_string()))?;
        Ok(Argon2::default()
            .verify_password(secret.expose().as_bytes(), &parsed)
            .is_ok())
    }

    /// Reconstructs a hash from persisted storage.
    ///
    /// Storage is trusted; the PHC format is checked again at verification
    /// time.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the PHC string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SecretHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
