//! Unit and service tests for the operation module.

mod service_tests;
mod toggle_tests;
