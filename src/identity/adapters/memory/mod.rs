//! In-memory adapters for identity ports.

mod credentials;

pub use credentials::InMemoryCredentialRepository;
