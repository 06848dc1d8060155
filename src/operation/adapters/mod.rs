//! Adapter implementations for operation ports.

pub mod memory;
pub mod postgres;
