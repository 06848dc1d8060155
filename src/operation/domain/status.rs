//! Execution-status and threat-level axes.
//!
//! The two enums are independent: an operation may be `CRITICAL` and
//! `TERMINATED` at the same time.

use super::{ParseExecutionStatusError, ParseThreatLevelError};
use serde::{Deserialize, Serialize};

/// Completion-state axis of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Operation has been deployed but not completed.
    Initialized,
    /// Operation is actively being worked.
    InProgress,
    /// Operation has been completed.
    Terminated,
    /// Operation has failed.
    Failed,
}

impl ExecutionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialized => "INITIALIZED",
            Self::InProgress => "IN_PROGRESS",
            Self::Terminated => "TERMINATED",
            Self::Failed => "FAILED",
        }
    }

    /// Returns the status after a completion toggle.
    ///
    /// The toggle is two-state over a four-state enum: `TERMINATED` flips
    /// back to `INITIALIZED`, while every other status (including
    /// `IN_PROGRESS` and `FAILED`) flips to `TERMINATED`. `IN_PROGRESS` and
    /// `FAILED` are therefore reachable only by direct write, never by
    /// toggling.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Terminated => Self::Initialized,
            Self::Initialized | Self::InProgress | Self::Failed => Self::Terminated,
        }
    }
}

impl TryFrom<&str> for ExecutionStatus {
    type Error = ParseExecutionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "INITIALIZED" => Ok(Self::Initialized),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "TERMINATED" => Ok(Self::Terminated),
            "FAILED" => Ok(Self::Failed),
            _ => Err(ParseExecutionStatusError(value.to_owned())),
        }
    }
}

/// Priority axis of an operation.
///
/// `CRITICAL` doubles as the "starred/important" flag in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    /// Baseline priority.
    LowThreat,
    /// Elevated priority.
    MediumThreat,
    /// High priority.
    HighThreat,
    /// Starred/important.
    Critical,
}

impl ThreatLevel {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowThreat => "LOW_THREAT",
            Self::MediumThreat => "MEDIUM_THREAT",
            Self::HighThreat => "HIGH_THREAT",
            Self::Critical => "CRITICAL",
        }
    }

    /// Returns whether this level marks the operation as starred.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Returns the level after a star toggle.
    ///
    /// Any non-`CRITICAL` level becomes `CRITICAL`; only `CRITICAL` drops
    /// back, and it always drops to `LOW_THREAT`. A `MEDIUM_THREAT` or
    /// `HIGH_THREAT` operation therefore loses its original level across a
    /// star round trip.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Critical => Self::LowThreat,
            Self::LowThreat | Self::MediumThreat | Self::HighThreat => Self::Critical,
        }
    }
}

impl TryFrom<&str> for ThreatLevel {
    type Error = ParseThreatLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOW_THREAT" => Ok(Self::LowThreat),
            "MEDIUM_THREAT" => Ok(Self::MediumThreat),
            "HIGH_THREAT" => Ok(Self::HighThreat),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseThreatLevelError(value.to_owned())),
        }
    }
}
