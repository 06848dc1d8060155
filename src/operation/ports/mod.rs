//! Port contracts for operation lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by operation
//! services.

pub mod repository;

pub use repository::{OperationRepository, OperationRepositoryError, OperationRepositoryResult};
