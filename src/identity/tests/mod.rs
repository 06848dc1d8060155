//! Unit and service tests for the identity module.

mod domain_tests;
mod service_tests;
