//! Domain model for operation lifecycle management.
//!
//! The operation domain models directive validation, the execution-status and
//! threat-level axes with their toggle rules, and the operation aggregate
//! while keeping all infrastructure concerns outside of the domain boundary.

mod directive;
mod error;
mod ids;
mod operation;
mod status;

pub use directive::Directive;
pub use error::{OperationDomainError, ParseExecutionStatusError, ParseThreatLevelError};
pub use ids::{AgentId, OperationId};
pub use operation::{DEFAULT_INTEL, Operation, OperationDraft, PersistedOperationData};
pub use status::{ExecutionStatus, ThreatLevel};
