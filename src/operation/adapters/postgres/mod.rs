//! `PostgreSQL` adapters for operation persistence.

mod models;
mod repository;
mod schema;

pub use repository::{OperationPgPool, PostgresOperationRepository};
