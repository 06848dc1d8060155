//! Repository port for operation persistence, lookup, and removal.

use crate::operation::domain::{AgentId, Operation, OperationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for operation repository operations.
pub type OperationRepositoryResult<T> = Result<T, OperationRepositoryError>;

/// Operation persistence contract.
#[async_trait]
pub trait OperationRepository: Send + Sync {
    /// Stores a new operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationRepositoryError::DuplicateOperation`] when the
    /// operation ID already exists.
    async fn create(&self, operation: &Operation) -> OperationRepositoryResult<()>;

    /// Returns all operations owned by the given agent, ordered by
    /// `created_at` descending (newest first).
    ///
    /// An unknown agent yields an empty list, not an error.
    async fn find_by_agent(&self, agent_id: AgentId) -> OperationRepositoryResult<Vec<Operation>>;

    /// Finds an operation by identifier.
    ///
    /// Returns `None` when the operation does not exist.
    async fn find_by_id(&self, id: OperationId) -> OperationRepositoryResult<Option<Operation>>;

    /// Persists changes to an existing operation (full-record replace).
    ///
    /// The owning agent reference is treated as immutable; callers only
    /// mutate lifecycle fields.
    ///
    /// # Errors
    ///
    /// Returns [`OperationRepositoryError::NotFound`] when the operation does
    /// not exist.
    async fn update(&self, operation: &Operation) -> OperationRepositoryResult<()>;

    /// Hard-deletes an operation. No tombstone is kept.
    ///
    /// # Errors
    ///
    /// Returns [`OperationRepositoryError::NotFound`] when the operation does
    /// not exist.
    async fn delete(&self, id: OperationId) -> OperationRepositoryResult<()>;
}

/// Errors returned by operation repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OperationRepositoryError {
    /// An operation with the same identifier already exists.
    #[error("duplicate operation identifier: {0}")]
    DuplicateOperation(OperationId),

    /// The operation was not found.
    #[error("operation not found: {0}")]
    NotFound(OperationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OperationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
