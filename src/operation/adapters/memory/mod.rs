//! In-memory adapters for operation ports.

mod operations;

pub use operations::InMemoryOperationRepository;
