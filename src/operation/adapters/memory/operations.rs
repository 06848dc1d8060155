//! In-memory operation repository for lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::operation::{
    domain::{AgentId, Operation, OperationId},
    ports::{OperationRepository, OperationRepositoryError, OperationRepositoryResult},
};

/// Thread-safe in-memory operation repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOperationRepository {
    state: Arc<RwLock<InMemoryOperationState>>,
}

#[derive(Debug, Default)]
struct InMemoryOperationState {
    operations: HashMap<OperationId, Operation>,
    agent_index: HashMap<AgentId, Vec<OperationId>>,
}

impl InMemoryOperationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OperationRepository for InMemoryOperationRepository {
    async fn create(&self, operation: &Operation) -> OperationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            OperationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.operations.contains_key(&operation.id()) {
            return Err(OperationRepositoryError::DuplicateOperation(operation.id()));
        }

        state
            .agent_index
            .entry(operation.agent_id())
            .or_default()
            .push(operation.id());
        state.operations.insert(operation.id(), operation.clone());
        Ok(())
    }

    async fn find_by_agent(&self, agent_id: AgentId) -> OperationRepositoryResult<Vec<Operation>> {
        let state = self.state.read().map_err(|err| {
            OperationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let mut operations: Vec<Operation> = state
            .agent_index
            .get(&agent_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.operations.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();

        // Reverse insertion order first so the stable sort keeps
        // newest-inserted first among equal timestamps.
        operations.reverse();
        operations.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(operations)
    }

    async fn find_by_id(&self, id: OperationId) -> OperationRepositoryResult<Option<Operation>> {
        let state = self.state.read().map_err(|err| {
            OperationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.operations.get(&id).cloned())
    }

    async fn update(&self, operation: &Operation) -> OperationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            OperationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.operations.contains_key(&operation.id()) {
            return Err(OperationRepositoryError::NotFound(operation.id()));
        }

        state.operations.insert(operation.id(), operation.clone());
        Ok(())
    }

    async fn delete(&self, id: OperationId) -> OperationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            OperationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .operations
            .remove(&id)
            .ok_or(OperationRepositoryError::NotFound(id))?;

        if let Some(ids) = state.agent_index.get_mut(&removed.agent_id()) {
            ids.retain(|entry| *entry != id);
            if ids.is_empty() {
                state.agent_index.remove(&removed.agent_id());
            }
        }
        Ok(())
    }
}
