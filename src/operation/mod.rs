//! Operation lifecycle management for Mainframe.
//!
//! This module implements deployment of operations (the system's task
//! records) against an owning agent identity, newest-first listing, the
//! execution-status and threat-level toggles, and hard removal. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
