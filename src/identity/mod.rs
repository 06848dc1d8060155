//! Identity management for Mainframe.
//!
//! This module implements node identity signup and authentication: creating
//! identity records with uniquely reserved handles and emails, hashing access
//! keys with a per-record salt, verifying login attempts, and recording the
//! latest successful uplink. The module follows hexagonal architecture:
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
