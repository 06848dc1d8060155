//! Repository port for identity persistence and handle lookup.

use crate::identity::domain::{EmailAddress, Handle, Identity, IdentityId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential repository operations.
pub type CredentialRepositoryResult<T> = Result<T, CredentialRepositoryError>;

/// Credential persistence contract.
///
/// Implementations own uniqueness enforcement: when two concurrent signups
/// race on the same handle or email, exactly one `create` succeeds and the
/// rest observe a duplicate error.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Stores a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialRepositoryError::DuplicateHandle`] when the handle
    /// is already reserved, or [`CredentialRepositoryError::DuplicateEmail`]
    /// when the email is already registered. Comparison is case-normalized
    /// because [`Handle`] and [`EmailAddress`] lowercase on construction.
    async fn create(&self, identity: &Identity) -> CredentialRepositoryResult<()>;

    /// Finds an identity by its normalized handle.
    ///
    /// Returns `None` when no identity has reserved the handle.
    async fn find_by_handle(&self, handle: &Handle)
    -> CredentialRepositoryResult<Option<Identity>>;

    /// Updates `last_seen_at` on an existing identity.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialRepositoryError::NotFound`] when the identity no
    /// longer exists.
    async fn touch_last_seen(
        &self,
        id: IdentityId,
        timestamp: DateTime<Utc>,
    ) -> CredentialRepositoryResult<()>;
}

/// Errors returned by credential repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialRepositoryError {
    /// An identity with the same handle already exists.
    #[error("identity handle already reserved: {0}")]
    DuplicateHandle(Handle),

    /// An identity with the same email already exists.
    #[error("email already registered: {0}")]
    DuplicateEmail(EmailAddress),

    /// The identity was not found.
    #[error("identity not found: {0}")]
    NotFound(IdentityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
