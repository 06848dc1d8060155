//! Service layer for operation deployment, listing, toggling, and removal.

use crate::operation::{
    domain::{
        AgentId, Directive, Operation, OperationDomainError, OperationDraft, OperationId,
        ThreatLevel,
    },
    ports::{OperationRepository, OperationRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for deploying a new operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOperationRequest {
    directive: String,
    agent_id: String,
    intel: Option<String>,
    threat_level: Option<String>,
    termination_date: Option<DateTime<Utc>>,
    reminder_time: Option<String>,
    sector_tags: Vec<String>,
}

impl DeployOperationRequest {
    /// Creates a request with the two mandatory fields.
    #[must_use]
    pub fn new(directive: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            agent_id: agent_id.into(),
            intel: None,
            threat_level: None,
            termination_date: None,
            reminder_time: None,
            sector_tags: Vec::new(),
        }
    }

    /// Sets the intel text.
    #[must_use]
    pub fn with_intel(mut self, intel: impl Into<String>) -> Self {
        self.intel = Some(intel.into());
        self
    }

    /// Sets the initial threat level as raw caller input.
    #[must_use]
    pub fn with_threat_level(mut self, threat_level: impl Into<String>) -> Self {
        self.threat_level = Some(threat_level.into());
        self
    }

    /// Sets the target termination date.
    #[must_use]
    pub const fn with_termination_date(mut self, termination_date: DateTime<Utc>) -> Self {
        self.termination_date = Some(termination_date);
        self
    }

    /// Sets the reminder time-of-day text.
    #[must_use]
    pub fn with_reminder_time(mut self, reminder_time: impl Into<String>) -> Self {
        self.reminder_time = Some(reminder_time.into());
        self
    }

    /// Sets the sector tags.
    #[must_use]
    pub fn with_sector_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.sector_tags = tags.into_iter().collect();
        self
    }
}

/// Service-level errors for operation lifecycle operations.
#[derive(Debug, Error)]
pub enum OperationLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] OperationDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] OperationRepositoryError),
}

/// Result type for operation lifecycle service operations.
pub type OperationLifecycleResult<T> = Result<T, OperationLifecycleError>;

/// Operation lifecycle orchestration service.
pub struct OperationLifecycleService<R, C>
where
    R: OperationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for OperationLifecycleService<R, C>
where
    R: OperationRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> OperationLifecycleService<R, C>
where
    R: OperationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new operation lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Deploys a new operation for the given agent.
    ///
    /// # Errors
    ///
    /// Returns [`OperationLifecycleError::Domain`] when the directive is
    /// empty, the agent reference is invalid, or the threat level is not a
    /// recognized level, and [`OperationLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn deploy(
        &self,
        request: DeployOperationRequest,
    ) -> OperationLifecycleResult<Operation> {
        let DeployOperationRequest {
            directive,
            agent_id,
            intel,
            threat_level,
            termination_date,
            reminder_time,
            sector_tags,
        } = request;

        let parsed_directive = Directive::new(directive)?;
        let parsed_agent = AgentId::parse(&agent_id)?;

        let mut draft = OperationDraft::new(parsed_directive, parsed_agent);
        if let Some(text) = intel {
            draft = draft.with_intel(text);
        }
        if let Some(raw_level) = threat_level {
            let level = ThreatLevel::try_from(raw_level.as_str())
                .map_err(|_| OperationDomainError::InvalidThreatLevel(raw_level))?;
            draft = draft.with_threat_level(level);
        }
        if let Some(date) = termination_date {
            draft = draft.with_termination_date(date);
        }
        if let Some(time) = reminder_time {
            draft = draft.with_reminder_time(time);
        }
        draft = draft.with_sector_tags(sector_tags);

        let operation = Operation::deploy(draft, &*self.clock);
        self.repository.create(&operation).await?;
        Ok(operation)
    }

    /// Lists all operations owned by the given agent, newest first.
    ///
    /// An agent with no operations yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`OperationLifecycleError::Domain`] when the agent reference
    /// is invalid, or [`OperationLifecycleError::Repository`] when
    /// persistence lookup fails.
    pub async fn list(&self, agent_id: &str) -> OperationLifecycleResult<Vec<Operation>> {
        let parsed_agent = AgentId::parse(agent_id)?;
        Ok(self.repository.find_by_agent(parsed_agent).await?)
    }

    /// Flips the execution status of an operation.
    ///
    /// `TERMINATED` becomes `INITIALIZED`; every other status becomes
    /// `TERMINATED`. Concurrent toggles on the same operation resolve as
    /// last-writer-wins; no locking is taken.
    ///
    /// # Errors
    ///
    /// Returns [`OperationLifecycleError::Repository`] with
    /// [`OperationRepositoryError::NotFound`] when the operation does not
    /// exist, or on persistence failure.
    pub async fn toggle_execution(&self, id: OperationId) -> OperationLifecycleResult<Operation> {
        let mut operation = self.find_by_id_or_error(id).await?;
        operation.toggle_execution();
        self.repository.update(&operation).await?;
        Ok(operation)
    }

    /// Flips the star (threat level) of an operation.
    ///
    /// Any non-`CRITICAL` level becomes `CRITICAL`; `CRITICAL` drops to
    /// `LOW_THREAT`. Concurrent toggles resolve as last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns [`OperationLifecycleError::Repository`] with
    /// [`OperationRepositoryError::NotFound`] when the operation does not
    /// exist, or on persistence failure.
    pub async fn toggle_threat(&self, id: OperationId) -> OperationLifecycleResult<Operation> {
        let mut operation = self.find_by_id_or_error(id).await?;
        operation.toggle_threat();
        self.repository.update(&operation).await?;
        Ok(operation)
    }

    /// Hard-deletes an operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationLifecycleError::Repository`] with
    /// [`OperationRepositoryError::NotFound`] when the operation does not
    /// exist, or on persistence failure.
    pub async fn remove(&self, id: OperationId) -> OperationLifecycleResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    async fn find_by_id_or_error(&self, id: OperationId) -> OperationLifecycleResult<Operation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| OperationRepositoryError::NotFound(id).into())
    }
}
