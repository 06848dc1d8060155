//! Service layer for identity signup and login.

use crate::identity::{
    domain::{
        EmailAddress, Handle, Identity, IdentityDomainError, RawSecret, SecretHash,
        SecretHashError,
    },
    ports::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for initializing a new identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    handle: String,
    email: String,
    secret: String,
}

impl SignupRequest {
    /// Creates a signup request from raw caller input.
    #[must_use]
    pub fn new(
        handle: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            email: email.into(),
            secret: secret.into(),
        }
    }
}

/// Request payload for authenticating an existing identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    handle: String,
    secret: String,
}

impl LoginRequest {
    /// Creates a login request from raw caller input.
    #[must_use]
    pub fn new(handle: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            secret: secret.into(),
        }
    }
}

/// Service-level errors for identity operations.
#[derive(Debug, Error)]
pub enum IdentityServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// The handle or email is already registered.
    #[error("identity handle or email already exists: {0}")]
    HandleOrEmailTaken(#[source] CredentialRepositoryError),

    /// No identity has reserved the given handle.
    #[error("identity not found: {0}")]
    IdentityNotFound(Handle),

    /// The supplied access key does not match the stored hash.
    #[error("invalid access key")]
    InvalidSecret,

    /// The hashing primitive failed.
    #[error(transparent)]
    Hashing(#[from] SecretHashError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CredentialRepositoryError),
}

/// Result type for identity service operations.
pub type IdentityServiceResult<T> = Result<T, IdentityServiceError>;

/// Identity signup and authentication orchestration service.
pub struct IdentityService<R, C>
where
    R: CredentialRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for IdentityService<R, C>
where
    R: CredentialRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> IdentityService<R, C>
where
    R: CredentialRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new identity service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Initializes a new identity with a freshly salted access key hash.
    ///
    /// The returned aggregate includes the stored hash; callers shaping
    /// external responses decide whether to redact it.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Domain`] when input validation fails,
    /// [`IdentityServiceError::HandleOrEmailTaken`] when the handle or email
    /// is already registered, or [`IdentityServiceError::Repository`] on
    /// other persistence failures.
    pub async fn signup(&self, request: SignupRequest) -> IdentityServiceResult<Identity> {
        let SignupRequest {
            handle,
            email,
            secret,
        } = request;

        let identity_handle = Handle::new(handle)?;
        let email_address = EmailAddress::new(email)?;
        let raw_secret = RawSecret::new(secret)?;
        let secret_hash = SecretHash::derive(&raw_secret)?;

        let identity = Identity::new(identity_handle, email_address, secret_hash, &*self.clock);
        store_identity(&*self.repository, &identity).await?;
        Ok(identity)
    }

    /// Authenticates an identity by handle and access key.
    ///
    /// On success the identity's `last_seen_at` is advanced to the current
    /// clock time, both in the returned aggregate and in the store.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Domain`] when input validation fails,
    /// [`IdentityServiceError::IdentityNotFound`] when the handle is unknown,
    /// [`IdentityServiceError::InvalidSecret`] when the access key does not
    /// match, or [`IdentityServiceError::Repository`] on persistence
    /// failures.
    pub async fn login(&self, request: LoginRequest) -> IdentityServiceResult<Identity> {
        let LoginRequest { handle, secret } = request;

        let identity_handle = Handle::new(handle)?;
        let raw_secret = RawSecret::new(secret)?;

        let mut identity = self
            .repository
            .find_by_handle(&identity_handle)
            .await?
            .ok_or(IdentityServiceError::IdentityNotFound(identity_handle))?;

        if !identity.secret_hash().verify(&raw_secret)? {
            return Err(IdentityServiceError::InvalidSecret);
        }

        identity.record_uplink(&*self.clock);
        self.repository
            .touch_last_seen(identity.id(), identity.last_seen_at())
            .await?;
        Ok(identity)
    }

    /// Finds an identity by raw handle input.
    ///
    /// Returns `Ok(None)` when no identity has reserved the handle.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Domain`] when the handle string fails
    /// validation, or [`IdentityServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_handle(&self, handle: &str) -> IdentityServiceResult<Option<Identity>> {
        let identity_handle = Handle::new(handle)?;
        Ok(self.repository.find_by_handle(&identity_handle).await?)
    }
}

/// Stores a new identity, translating duplicate-key errors into the
/// user-facing taken error.
async fn store_identity(
    repository: &impl CredentialRepository,
    identity: &Identity,
) -> IdentityServiceResult<()> {
    let result: CredentialRepositoryResult<()> = repository.create(identity).await;
    result.map_err(|err| match err {
        CredentialRepositoryError::DuplicateHandle(_)
        | CredentialRepositoryError::DuplicateEmail(_) => {
            IdentityServiceError::HandleOrEmailTaken(err)
        }
        other => IdentityServiceError::Repository(other),
    })
}
