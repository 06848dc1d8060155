//! Operation aggregate root and deployment draft.

use super::{AgentId, Directive, ExecutionStatus, OperationId, ThreatLevel};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Intel text recorded when the caller supplies none.
pub const DEFAULT_INTEL: &str = "NO_ADDITIONAL_DATA_FOUND";

/// Validated input for deploying a new operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDraft {
    directive: Directive,
    agent_id: AgentId,
    intel: Option<String>,
    threat_level: Option<ThreatLevel>,
    termination_date: Option<DateTime<Utc>>,
    reminder_time: Option<String>,
    sector_tags: Vec<String>,
}

impl OperationDraft {
    /// Creates a draft with the two mandatory fields.
    #[must_use]
    pub const fn new(directive: Directive, agent_id: AgentId) -> Self {
        Self {
            directive,
            agent_id,
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

    /// Sets the initial threat level.
    #[must_use]
    pub const fn with_threat_level(mut self, threat_level: ThreatLevel) -> Self {
        self.threat_level = Some(threat_level);
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

/// Operation aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    id: OperationId,
    agent_id: AgentId,
    directive: Directive,
    intel: String,
    execution_status: ExecutionStatus,
    threat_level: ThreatLevel,
    termination_date: Option<DateTime<Utc>>,
    reminder_time: Option<String>,
    sector_tags: Vec<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted operation aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOperationData {
    /// Persisted operation identifier.
    pub id: OperationId,
    /// Persisted owning agent reference.
    pub agent_id: AgentId,
    /// Persisted directive.
    pub directive: Directive,
    /// Persisted intel text.
    pub intel: String,
    /// Persisted execution status.
    pub execution_status: ExecutionStatus,
    /// Persisted threat level.
    pub threat_level: ThreatLevel,
    /// Persisted termination date, if any.
    pub termination_date: Option<DateTime<Utc>>,
    /// Persisted reminder time, if any.
    pub reminder_time: Option<String>,
    /// Persisted sector tags.
    pub sector_tags: Vec<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Deploys a new operation from a validated draft.
    ///
    /// Defaults are applied here: intel falls back to [`DEFAULT_INTEL`],
    /// the execution status starts `INITIALIZED`, and the threat level starts
    /// `LOW_THREAT` unless the draft set one.
    #[must_use]
    pub fn deploy(draft: OperationDraft, clock: &impl Clock) -> Self {
        let OperationDraft {
            directive,
            agent_id,
            intel,
            threat_level,
            termination_date,
            reminder_time,
            sector_tags,
        } = draft;

        Self {
            id: OperationId::new(),
            agent_id,
            directive,
            intel: intel.unwrap_or_else(|| DEFAULT_INTEL.to_owned()),
            execution_status: ExecutionStatus::Initialized,
            threat_level: threat_level.unwrap_or(ThreatLevel::LowThreat),
            termination_date,
            reminder_time,
            sector_tags,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an operation from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedOperationData) -> Self {
        Self {
            id: data.id,
            agent_id: data.agent_id,
            directive: data.directive,
            intel: data.intel,
            execution_status: data.execution_status,
            threat_level: data.threat_level,
            termination_date: data.termination_date,
            reminder_time: data.reminder_time,
            sector_tags: data.sector_tags,
            created_at: data.created_at,
        }
    }

    /// Returns the operation identifier.
    #[must_use]
    pub const fn id(&self) -> OperationId {
        self.id
    }

    /// Returns the owning agent reference.
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    /// Returns the directive.
    #[must_use]
    pub const fn directive(&self) -> &Directive {
        &self.directive
    }

    /// Returns the intel text.
    #[must_use]
    pub fn intel(&self) -> &str {
        &self.intel
    }

    /// Returns the execution status.
    #[must_use]
    pub const fn execution_status(&self) -> ExecutionStatus {
        self.execution_status
    }

    /// Returns the threat level.
    #[must_use]
    pub const fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    /// Returns the target termination date, if any.
    #[must_use]
    pub const fn termination_date(&self) -> Option<DateTime<Utc>> {
        self.termination_date
    }

    /// Returns the reminder time-of-day text, if any.
    #[must_use]
    pub fn reminder_time(&self) -> Option<&str> {
        self.reminder_time.as_deref()
    }

    /// Returns the sector tags.
    #[must_use]
    pub fn sector_tags(&self) -> &[String] {
        &self.sector_tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies the completion toggle to the execution status.
    ///
    /// See [`ExecutionStatus::toggled`] for the exact two-state rule.
    pub const fn toggle_execution(&mut self) {
        self.execution_status = self.execution_status.toggled();
    }

    /// Applies the star toggle to the threat level.
    ///
    /// See [`ThreatLevel::toggled`] for the collapse rule.
    pub const fn toggle_threat(&mut self) {
        self.threat_level = self.threat_level.toggled();
    }
}
