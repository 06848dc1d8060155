//! `PostgreSQL` repository implementation for operation storage.

use super::{
    models::{NewOperationRow, OperationChangeset, OperationRow},
    schema::operations,
};
use crate::operation::{
    domain::{
        AgentId, Directive, ExecutionStatus, Operation, OperationId, PersistedOperationData,
        ThreatLevel,
    },
    ports::{OperationRepository, OperationRepositoryError, OperationRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by operation adapters.
pub type OperationPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed operation repository.
#[derive(Debug, Clone)]
pub struct PostgresOperationRepository {
    pool: OperationPgPool,
}

impl PostgresOperationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: OperationPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> OperationRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> OperationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(OperationRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(OperationRepositoryError::persistence)?
    }
}

#[async_trait]
impl OperationRepository for PostgresOperationRepository {
    async fn create(&self, operation: &Operation) -> OperationRepositoryResult<()> {
        let operation_id = operation.id();
        let new_row = to_new_row(operation);

        self.run_blocking(move |connection| {
            diesel::insert_into(operations::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        OperationRepositoryError::DuplicateOperation(operation_id)
                    }
                    _ => OperationRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_agent(&self, agent_id: AgentId) -> OperationRepositoryResult<Vec<Operation>> {
        self.run_blocking(move |connection| {
            let rows = operations::table
                .filter(operations::agent_id.eq(agent_id.into_inner()))
                .order(operations::created_at.desc())
                .select(OperationRow::as_select())
                .load::<OperationRow>(connection)
                .map_err(OperationRepositoryError::persistence)?;
            rows.into_iter().map(row_to_operation).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: OperationId) -> OperationRepositoryResult<Option<Operation>> {
        self.run_blocking(move |connection| {
            let row = operations::table
                .filter(operations::id.eq(id.into_inner()))
                .select(OperationRow::as_select())
                .first::<OperationRow>(connection)
                .optional()
                .map_err(OperationRepositoryError::persistence)?;
            row.map(row_to_operation).transpose()
        })
        .await
    }

    async fn update(&self, operation: &Operation) -> OperationRepositoryResult<()> {
        let operation_id = operation.id();
        let changeset = to_changeset(operation);

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                operations::table.filter(operations::id.eq(operation_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(OperationRepositoryError::persistence)?;
            if updated == 0 {
                return Err(OperationRepositoryError::NotFound(operation_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: OperationId) -> OperationRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(operations::table.filter(operations::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(OperationRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(OperationRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(operation: &Operation) -> NewOperationRow {
    NewOperationRow {
        id: operation.id().into_inner(),
        agent_id: operation.agent_id().into_inner(),
        directive: operation.directive().as_str().to_owned(),
        intel: operation.intel().to_owned(),
        execution_status: operation.execution_status().as_str().to_owned(),
        threat_level: operation.threat_level().as_str().to_owned(),
        termination_date: operation.termination_date(),
        reminder_time: operation.reminder_time().map(ToOwned::to_owned),
        sector_tags: serde_json::json!(operation.sector_tags()),
        created_at: operation.created_at(),
    }
}

fn to_changeset(operation: &Operation) -> OperationChangeset {
    OperationChangeset {
        directive: operation.directive().as_str().to_owned(),
        intel: operation.intel().to_owned(),
        execution_status: operation.execution_status().as_str().to_owned(),
        threat_level: operation.threat_level().as_str().to_owned(),
        termination_date: operation.termination_date(),
        reminder_time: operation.reminder_time().map(ToOwned::to_owned),
        sector_tags: serde_json::json!(operation.sector_tags()),
    }
}

fn row_to_operation(row: OperationRow) -> OperationRepositoryResult<Operation> {
    let OperationRow {
        id,
        agent_id,
        directive: persisted_directive,
        intel,
        execution_status: persisted_status,
        threat_level: persisted_level,
        termination_date,
        reminder_time,
        sector_tags: persisted_tags,
        created_at,
    } = row;

    let directive =
        Directive::new(persisted_directive).map_err(OperationRepositoryError::persistence)?;
    let execution_status = ExecutionStatus::try_from(persisted_status.as_str())
        .map_err(OperationRepositoryError::persistence)?;
    let threat_level = ThreatLevel::try_from(persisted_level.as_str())
        .map_err(OperationRepositoryError::persistence)?;
    let sector_tags = serde_json::from_value::<Vec<String>>(persisted_tags)
        .map_err(OperationRepositoryError::persistence)?;

    let data = PersistedOperationData {
        id: OperationId::from_uuid(id),
        agent_id: AgentId::from_uuid(agent_id),
        directive,
        intel,
        execution_status,
        threat_level,
        termination_date,
        reminder_time,
        sector_tags,
        created_at,
    };
    Ok(Operation::from_persisted(data))
}
