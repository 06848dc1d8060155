//! Diesel row models for operation persistence.

use super::schema::operations;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for operation records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = operations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OperationRow {
    /// Operation identifier.
    pub id: uuid::Uuid,
    /// Owning agent reference.
    pub agent_id: uuid::Uuid,
    /// Directive text.
    pub directive: String,
    /// Intel free text.
    pub intel: String,
    /// Execution status.
    pub execution_status: String,
    /// Threat level.
    pub threat_level: String,
    /// Optional target termination date.
    pub termination_date: Option<DateTime<Utc>>,
    /// Optional reminder time-of-day text.
    pub reminder_time: Option<String>,
    /// Sector tags JSON payload.
    pub sector_tags: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for operation records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = operations)]
pub struct NewOperationRow {
    /// Operation identifier.
    pub id: uuid::Uuid,
    /// Owning agent reference.
    pub agent_id: uuid::Uuid,
    /// Directive text.
    pub directive: String,
    /// Intel free text.
    pub intel: String,
    /// Execution status.
    pub execution_status: String,
    /// Threat level.
    pub threat_level: String,
    /// Optional target termination date.
    pub termination_date: Option<DateTime<Utc>>,
    /// Optional reminder time-of-day text.
    pub reminder_time: Option<String>,
    /// Sector tags JSON payload.
    pub sector_tags: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset for full-record operation updates.
///
/// `treat_none_as_null` makes cleared optional fields write `NULL` instead of
/// being skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = operations)]
#[diesel(treat_none_as_null = true)]
pub struct OperationChangeset {
    /// Directive text.
    pub directive: String,
    /// Intel free text.
    pub intel: String,
    /// Execution status.
    pub execution_status: String,
    /// Threat level.
    pub threat_level: String,
    /// Optional target termination date.
    pub termination_date: Option<DateTime<Utc>>,
    /// Optional reminder time-of-day text.
    pub reminder_time: Option<String>,
    /// Sector tags JSON payload.
    pub sector_tags: Value,
}
