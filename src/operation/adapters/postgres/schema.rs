//! Diesel schema for operation persistence.

diesel::table! {
    /// Operation records owned by an agent identity.
    operations (id) {
        /// Operation identifier.
        id -> Uuid,
        /// Owning agent reference (advisory, not a foreign key).
        agent_id -> Uuid,
        /// Directive text.
        #[max_length = 500]
        directive -> Varchar,
        /// Intel free text.
        intel -> Text,
        /// Execution status.
        #[max_length = 20]
        execution_status -> Varchar,
        /// Threat level.
        #[max_length = 20]
        threat_level -> Varchar,
        /// Optional target termination date.
        termination_date -> Nullable<Timestamptz>,
        /// Optional reminder time-of-day text.
        #[max_length = 20]
        reminder_time -> Nullable<Varchar>,
        /// Sector tags as a JSON array of strings.
        sector_tags -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
