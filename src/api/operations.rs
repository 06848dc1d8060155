//! HTTP handlers and wire types for operation deployment and lifecycle.
//!
//! These endpoints are unauthenticated and trust the caller-supplied
//! `agent_id`; ownership is never checked against the identity store.

use super::{ApiError, AppState};
use crate::identity::ports::CredentialRepository;
use crate::operation::{
    domain::{Operation, OperationId},
    ports::OperationRepository,
    services::DeployOperationRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deploy request body.
#[derive(Debug, Deserialize)]
pub(super) struct DeployBody {
    #[serde(default)]
    directive: String,
    #[serde(default)]
    agent_id: String,
    intel: Option<String>,
    threat_level: Option<String>,
    termination_date: Option<DateTime<Utc>>,
    reminder_time: Option<String>,
    #[serde(default)]
    sector_tags: Vec<String>,
}

/// Wire representation of an operation record.
#[derive(Debug, Serialize)]
pub(super) struct OperationPayload {
    id: String,
    directive: String,
    intel: String,
    execution_status: &'static str,
    threat_level: &'static str,
    agent_id: String,
    termination_date: Option<DateTime<Utc>>,
    reminder_time: Option<String>,
    sector_tags: Vec<String>,
    initialized_at: DateTime<Utc>,
}

impl From<&Operation> for OperationPayload {
    fn from(operation: &Operation) -> Self {
        Self {
            id: operation.id().to_string(),
            directive: operation.directive().as_str().to_owned(),
            intel: operation.intel().to_owned(),
            execution_status: operation.execution_status().as_str(),
            threat_level: operation.threat_level().as_str(),
            agent_id: operation.agent_id().to_string(),
            termination_date: operation.termination_date(),
            reminder_time: operation.reminder_time().map(str::to_owned),
            sector_tags: operation.sector_tags().to_vec(),
            initialized_at: operation.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeployResponse {
    status: &'static str,
    message: String,
    payload: OperationPayload,
}

#[derive(Debug, Serialize)]
struct RemoveResponse {
    status: &'static str,
    message: String,
}

/// `POST /api/operations` — deploys a new operation.
pub(super) async fn deploy<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Json(body): Json<DeployBody>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = DeployOperationRequest::new(body.directive, body.agent_id)
        .with_sector_tags(body.sector_tags);
    if let Some(intel) = body.intel {
        request = request.with_intel(intel);
    }
    if let Some(threat_level) = body.threat_level {
        request = request.with_threat_level(threat_level);
    }
    if let Some(termination_date) = body.termination_date {
        request = request.with_termination_date(termination_date);
    }
    if let Some(reminder_time) = body.reminder_time {
        request = request.with_reminder_time(reminder_time);
    }

    let operation = state.operations.deploy(request).await?;

    let response = DeployResponse {
        status: "OPERATION_DEPLOYED",
        message: format!(
            "OPERATION {} DEPLOYED TO NODE {}",
            operation.id(),
            operation.agent_id()
        ),
        payload: OperationPayload::from(&operation),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /api/operations/:agent_id` — lists an agent's operations, newest
/// first.
pub(super) async fn list<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Path(agent_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let operations = state.operations.list(&agent_id).await?;
    let payloads: Vec<OperationPayload> =
        operations.iter().map(OperationPayload::from).collect();
    Ok(Json(payloads))
}

/// `PATCH /api/operations/:id/toggle` — flips the execution status.
pub(super) async fn toggle_execution<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let operation_id = parse_operation_id(&id)?;
    let operation = state.operations.toggle_execution(operation_id).await?;
    Ok(Json(OperationPayload::from(&operation)))
}

/// `PATCH /api/operations/:id/star` — flips the threat level star.
pub(super) async fn toggle_threat<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let operation_id = parse_operation_id(&id)?;
    let operation = state.operations.toggle_threat(operation_id).await?;
    Ok(Json(OperationPayload::from(&operation)))
}

/// `DELETE /api/operations/:id` — hard-deletes an operation.
pub(super) async fn remove<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let operation_id = parse_operation_id(&id)?;
    state.operations.remove(operation_id).await?;

    let response = RemoveResponse {
        status: "OPERATION_PURGED",
        message: format!("OPERATION {operation_id} PURGED FROM THE MAINFRAME"),
    };
    Ok(Json(response))
}

/// Parses a path segment into an operation identifier.
///
/// A malformed segment maps to not-found: no operation can exist under a
/// value that is not a UUID.
fn parse_operation_id(raw: &str) -> Result<OperationId, ApiError> {
    Uuid::parse_str(raw)
        .map(OperationId::from_uuid)
        .map_err(|_| ApiError::MalformedOperationId(raw.to_owned()))
}
