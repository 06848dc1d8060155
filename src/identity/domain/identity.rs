//! Identity aggregate root and status type.

use super::{EmailAddress, Handle, IdentityId, NodeTag, ParseIdentityStatusError, SecretHash};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Clearance level assigned to freshly initialized identities.
const DEFAULT_CLEARANCE_LEVEL: i32 = 1;

/// System status of an identity.
///
/// No specified operation transitions this field today; every identity is
/// created `Ready` and stays there. The remaining variants are persisted
/// values reserved for operator tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityStatus {
    /// Identity is active and may authenticate.
    Ready,
    /// Identity is deliberately taken offline.
    Offline,
    /// Identity is undergoing maintenance.
    Maintenance,
    /// Identity is flagged as compromised.
    Compromised,
}

impl IdentityStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Offline => "OFFLINE",
            Self::Maintenance => "MAINTENANCE",
            Self::Compromised => "COMPROMISED",
        }
    }
}

impl TryFrom<&str> for IdentityStatus {
    type Error = ParseIdentityStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "READY" => Ok(Self::Ready),
            "OFFLINE" => Ok(Self::Offline),
            "MAINTENANCE" => Ok(Self::Maintenance),
            "COMPROMISED" => Ok(Self::Compromised),
            _ => Err(ParseIdentityStatusError(value.to_owned())),
        }
    }
}

/// Identity aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: IdentityId,
    handle: Handle,
    email: EmailAddress,
    secret_hash: SecretHash,
    node_tag: NodeTag,
    status: IdentityStatus,
    clearance_level: i32,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted identity aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedIdentityData {
    /// Persisted identity identifier.
    pub id: IdentityId,
    /// Persisted normalized handle.
    pub handle: Handle,
    /// Persisted normalized email address.
    pub email: EmailAddress,
    /// Persisted access key hash.
    pub secret_hash: SecretHash,
    /// Persisted node tag.
    pub node_tag: NodeTag,
    /// Persisted system status.
    pub status: IdentityStatus,
    /// Persisted clearance level.
    pub clearance_level: i32,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest uplink timestamp.
    pub last_seen_at: DateTime<Utc>,
}

impl Identity {
    /// Creates a new identity with generated ID and node tag.
    ///
    /// The identity starts `Ready` at the default clearance level, with
    /// `last_seen_at` equal to the creation timestamp.
    #[must_use]
    pub fn new(
        handle: Handle,
        email: EmailAddress,
        secret_hash: SecretHash,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: IdentityId::new(),
            handle,
            email,
            secret_hash,
            node_tag: NodeTag::generate(),
            status: IdentityStatus::Ready,
            clearance_level: DEFAULT_CLEARANCE_LEVEL,
            created_at: timestamp,
            last_seen_at: timestamp,
        }
    }

    /// Reconstructs an identity from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedIdentityData) -> Self {
        Self {
            id: data.id,
            handle: data.handle,
            email: data.email,
            secret_hash: data.secret_hash,
            node_tag: data.node_tag,
            status: data.status,
            clearance_level: data.clearance_level,
            created_at: data.created_at,
            last_seen_at: data.last_seen_at,
        }
    }

    /// Returns the identity identifier.
    #[must_use]
    pub const fn id(&self) -> IdentityId {
        self.id
    }

    /// Returns the normalized handle.
    #[must_use]
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Returns the normalized email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored access key hash.
    #[must_use]
    pub const fn secret_hash(&self) -> &SecretHash {
        &self.secret_hash
    }

    /// Returns the node tag.
    #[must_use]
    pub const fn node_tag(&self) -> &NodeTag {
        &self.node_tag
    }

    /// Returns the system status.
    #[must_use]
    pub const fn status(&self) -> IdentityStatus {
        self.status
    }

    /// Returns the clearance level.
    #[must_use]
    pub const fn clearance_level(&self) -> i32 {
        self.clearance_level
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest successful uplink timestamp.
    #[must_use]
    pub const fn last_seen_at(&self) -> DateTime<Utc> {
        self.last_seen_at
    }

    /// Records a successful uplink, updating `last_seen_at` to now.
    pub fn record_uplink(&mut self, clock: &impl Clock) {
        self.last_seen_at = clock.utc();
    }

    /// Applies a store-issued `last_seen_at` touch.
    pub(crate) const fn set_last_seen_at(&mut self, timestamp: DateTime<Utc>) {
        self.last_seen_at = timestamp;
    }
}
