//! Error types for identity domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The identity handle is empty after trimming.
    #[error("identity_handle must not be empty")]
    EmptyHandle,

    /// The identity handle exceeds the persisted column width.
    #[error("identity_handle '{0}' exceeds 100 characters")]
    HandleTooLong(String),

    /// The email address is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email address lacks the minimal `local@domain` shape.
    #[error("email '{0}' is not a valid address")]
    InvalidEmail(String),

    /// The access key is empty.
    #[error("access_key_hash must not be empty")]
    EmptySecret,
}

/// Errors returned by access key hashing and verification.
///
/// These indicate a failure of the hashing primitive itself (or a corrupt
/// stored hash), not a mismatched secret.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretHashError {
    /// The hashing primitive rejected the input.
    #[error("access key hashing failed: {0}")]
    Hashing(String),

    /// The stored hash is not a valid PHC string.
    #[error("stored access key hash is malformed: {0}")]
    MalformedHash(String),
}

/// Error returned while parsing identity statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown identity status: {0}")]
pub struct ParseIdentityStatusError(pub String);
