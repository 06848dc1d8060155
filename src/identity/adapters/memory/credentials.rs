//! In-memory credential repository for identity tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{EmailAddress, Handle, Identity, IdentityId},
    ports::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult},
};

/// Thread-safe in-memory credential repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    state: Arc<RwLock<InMemoryCredentialState>>,
}

#[derive(Debug, Default)]
struct InMemoryCredentialState {
    identities: HashMap<IdentityId, Identity>,
    handle_index: HashMap<Handle, IdentityId>,
    email_index: HashMap<EmailAddress, IdentityId>,
}

impl InMemoryCredentialRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn create(&self, identity: &Identity) -> CredentialRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CredentialRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.handle_index.contains_key(identity.handle()) {
            return Err(CredentialRepositoryError::DuplicateHandle(
                identity.handle().clone(),
            ));
        }

        if state.email_index.contains_key(identity.email()) {
            return Err(CredentialRepositoryError::DuplicateEmail(
                identity.email().clone(),
            ));
        }

        state
            .handle_index
            .insert(identity.handle().clone(), identity.id());
        state
            .email_index
            .insert(identity.email().clone(), identity.id());
        state.identities.insert(identity.id(), identity.clone());
        Ok(())
    }

    async fn find_by_handle(
        &self,
        handle: &Handle,
    ) -> CredentialRepositoryResult<Option<Identity>> {
        let state = self.state.read().map_err(|err| {
            CredentialRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let identity = state
            .handle_index
            .get(handle)
            .and_then(|id| state.identities.get(id))
            .cloned();
        Ok(identity)
    }

    async fn touch_last_seen(
        &self,
        id: IdentityId,
        timestamp: DateTime<Utc>,
    ) -> CredentialRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CredentialRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let identity = state
            .identities
            .get(&id)
            .ok_or(CredentialRepositoryError::NotFound(id))?;

        let mut touched = identity.clone();
        touched.set_last_seen_at(timestamp);
        state.identities.insert(id, touched);
        Ok(())
    }
}
