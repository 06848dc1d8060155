//! Domain model for node identity management.
//!
//! The identity domain models handle and email normalization, one-way access
//! key hashing, and the identity aggregate itself while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod handle;
mod identity;
mod ids;
mod secret;

pub use error::{IdentityDomainError, ParseIdentityStatusError, SecretHashError};
pub use handle::{EmailAddress, Handle};
pub use identity::{Identity, IdentityStatus, PersistedIdentityData};
pub use ids::{IdentityId, NodeTag};
pub use secret::{RawSecret, SecretHash};
