//! `PostgreSQL` repository implementation for credential storage.

use super::{
    models::{IdentityRow, NewIdentityRow},
    schema::identities,
};
use crate::identity::{
    domain::{
        EmailAddress, Handle, Identity, IdentityId, IdentityStatus, NodeTag,
        PersistedIdentityData, SecretHash,
    },
    ports::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by identity adapters.
pub type CredentialPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed credential repository.
#[derive(Debug, Clone)]
pub struct PostgresCredentialRepository {
    pool: CredentialPgPool,
}

impl PostgresCredentialRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CredentialPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CredentialRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CredentialRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CredentialRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CredentialRepositoryError::persistence)?
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn create(&self, identity: &Identity) -> CredentialRepositoryResult<()> {
        let handle = identity.handle().clone();
        let email = identity.email().clone();
        let new_row = to_new_row(identity);

        self.run_blocking(move |connection| {
            diesel::insert_into(identities::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        CredentialRepositoryError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CredentialRepositoryError::DuplicateHandle(handle.clone())
                    }
                    _ => CredentialRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_handle(
        &self,
        handle: &Handle,
    ) -> CredentialRepositoryResult<Option<Identity>> {
        let lookup = handle.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = identities::table
                .filter(identities::handle.eq(&lookup))
                .select(IdentityRow::as_select())
                .first::<IdentityRow>(connection)
                .optional()
                .map_err(CredentialRepositoryError::persistence)?;
            row.map(row_to_identity).transpose()
        })
        .await
    }

    async fn touch_last_seen(
        &self,
        id: IdentityId,
        timestamp: DateTime<Utc>,
    ) -> CredentialRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(identities::table.filter(identities::id.eq(id.into_inner())))
                .set(identities::last_seen_at.eq(timestamp))
                .execute(connection)
                .map_err(CredentialRepositoryError::persistence)?;
            if updated == 0 {
                return Err(CredentialRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(identity: &Identity) -> NewIdentityRow {
    NewIdentityRow {
        id: identity.id().into_inner(),
        handle: identity.handle().as_str().to_owned(),
        email: identity.email().as_str().to_owned(),
        secret_hash: identity.secret_hash().as_str().to_owned(),
        node_tag: identity.node_tag().as_str().to_owned(),
        status: identity.status().as_str().to_owned(),
        clearance_level: identity.clearance_level(),
        created_at: identity.created_at(),
        last_seen_at: identity.last_seen_at(),
    }
}

fn row_to_identity(row: IdentityRow) -> CredentialRepositoryResult<Identity> {
    let IdentityRow {
        id,
        handle: persisted_handle,
        email: persisted_email,
        secret_hash,
        node_tag,
        status: persisted_status,
        clearance_level,
        created_at,
        last_seen_at,
    } = row;

    let handle = Handle::new(persisted_handle).map_err(CredentialRepositoryError::persistence)?;
    let email =
        EmailAddress::new(persisted_email).map_err(CredentialRepositoryError::persistence)?;
    let status = IdentityStatus::try_from(persisted_status.as_str())
        .map_err(CredentialRepositoryError::persistence)?;

    let data = PersistedIdentityData {
        id: IdentityId::from_uuid(id),
        handle,
        email,
        secret_hash: SecretHash::from_persisted(secret_hash),
        node_tag: NodeTag::from_persisted(node_tag),
        status,
        clearance_level,
        created_at,
        last_seen_at,
    };
    Ok(Identity::from_persisted(data))
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_identities_email_unique")
}
