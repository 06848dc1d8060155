//! Error types for operation domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain operation values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationDomainError {
    /// The directive is empty after trimming.
    #[error("directive must not be empty")]
    EmptyDirective,

    /// The directive exceeds the persisted column width.
    #[error("directive exceeds 500 characters")]
    DirectiveTooLong(String),

    /// The owning agent reference is missing or not a valid identifier.
    #[error("agent_id '{0}' is not a valid agent reference")]
    InvalidAgentRef(String),

    /// The threat level value is not a recognized level.
    #[error("unknown threat level: {0}")]
    InvalidThreatLevel(String),
}

/// Error returned while parsing execution statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown execution status: {0}")]
pub struct ParseExecutionStatusError(pub String);

/// Error returned while parsing threat levels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown threat level: {0}")]
pub struct ParseThreatLevelError(pub String);
