//! Diesel row models for identity persistence.

use super::schema::identities;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for identity records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = identities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IdentityRow {
    /// Identity identifier.
    pub id: uuid::Uuid,
    /// Normalized login handle.
    pub handle: String,
    /// Normalized email address.
    pub email: String,
    /// PHC-format access key hash.
    pub secret_hash: String,
    /// Cosmetic node designation.
    pub node_tag: String,
    /// System status.
    pub status: String,
    /// Clearance level.
    pub clearance_level: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest successful uplink timestamp.
    pub last_seen_at: DateTime<Utc>,
}

/// Insert model for identity records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = identities)]
pub struct NewIdentityRow {
    /// Identity identifier.
    pub id: uuid::Uuid,
    /// Normalized login handle.
    pub handle: String,
    /// Normalized email address.
    pub email: String,
    /// PHC-format access key hash.
    pub secret_hash: String,
    /// Cosmetic node designation.
    pub node_tag: String,
    /// System status.
    pub status: String,
    /// Clearance level.
    pub clearance_level: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest successful uplink timestamp.
    pub last_seen_at: DateTime<Utc>,
}
