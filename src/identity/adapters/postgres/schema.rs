//! Diesel schema for identity persistence.
//!
//! Uniqueness of `handle` and `email` is enforced by the unique indexes
//! `idx_identities_handle_unique` and `idx_identities_email_unique`; the
//! repository maps violations of each back to the matching duplicate error.

diesel::table! {
    /// Identity records with hashed access keys.
    identities (id) {
        /// Identity identifier.
        id -> Uuid,
        /// Normalized (lowercased) login handle.
        #[max_length = 100]
        handle -> Varchar,
        /// Normalized email address.
        #[max_length = 255]
        email -> Varchar,
        /// PHC-format access key hash.
        #[max_length = 255]
        secret_hash -> Varchar,
        /// Cosmetic node designation. Deliberately carries no unique index:
        /// the four-digit tag space is too small to promise uniqueness, so
        /// collisions are tolerated rather than rejected.
        #[max_length = 20]
        node_tag -> Varchar,
        /// System status.
        #[max_length = 20]
        status -> Varchar,
        /// Clearance level.
        clearance_level -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Latest successful uplink timestamp.
        last_seen_at -> Timestamptz,
    }
}
