//! Port contracts for identity management.
//!
//! Ports define infrastructure-agnostic interfaces used by identity services.

pub mod repository;

pub use repository::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult};
