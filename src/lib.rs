//! Mainframe: terminal-themed operations tracker backend.
//!
//! This crate provides the identity and operation-lifecycle services behind
//! the mainframe REST API: node identity signup and login, and deployment,
//! listing, state toggling, and removal of operations owned by an identity.
//!
//! # Architecture
//!
//! Mainframe follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`identity`]: Node identity records, credential storage, and
//!   authentication
//! - [`operation`]: Operation deployment and lifecycle tracking
//! - [`api`]: HTTP inbound adapter exposing the REST surface

pub mod api;
pub mod identity;
pub mod operation;
