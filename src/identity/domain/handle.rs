//! Validated handle and email value types.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an identity handle, matching the `VARCHAR(100)` column.
const MAX_HANDLE_LENGTH: usize = 100;

/// Validated, case-normalized identity handle.
///
/// Handles are the unique human-chosen login name for an identity. The input
/// is trimmed and lowercased before storage and comparison, so `Ghost` and
/// `ghost` reserve the same handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Creates a validated handle.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyHandle`] when the value is empty
    /// after trimming, or [`IdentityDomainError::HandleTooLong`] when it
    /// exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyHandle);
        }

        if normalized.len() > MAX_HANDLE_LENGTH {
            return Err(IdentityDomainError::HandleTooLong(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, case-normalized email address.
///
/// Validation is deliberately shallow: the address must be non-empty and
/// contain exactly one `@` with text on both sides. Deliverability is not
/// this domain's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyEmail`] when the value is empty
    /// after trimming, or [`IdentityDomainError::InvalidEmail`] when it lacks
    /// the minimal `local@domain` shape.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyEmail);
        }

        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let has_more_parts = parts.next().is_some();
        let is_valid = !local.is_empty() && !domain.is_empty() && !has_more_parts;

        if !is_valid {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
