//! Validated directive value type.

use super::OperationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a directive, matching the `VARCHAR(500)` column.
const MAX_DIRECTIVE_LENGTH: usize = 500;

/// Validated operation directive (the task's title text).
///
/// The input is trimmed; case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directive(String);

impl Directive {
    /// Creates a validated directive.
    ///
    /// # Errors
    ///
    /// Returns [`OperationDomainError::EmptyDirective`] when the value is
    /// empty after trimming, or [`OperationDomainError::DirectiveTooLong`]
    /// when it exceeds 500 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, OperationDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(OperationDomainError::EmptyDirective);
        }

        if trimmed.len() > MAX_DIRECTIVE_LENGTH {
            return Err(OperationDomainError::DirectiveTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the directive as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Directive {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
