//! HTTP handlers and wire types for identity signup and login.

use super::{ApiError, AppState};
use crate::identity::{
    domain::Identity,
    ports::CredentialRepository,
    services::{LoginRequest, SignupRequest},
};
use crate::operation::ports::OperationRepository;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Fixed marker returned in place of a real session token.
///
/// This is an opaque placeholder and must never be treated as a credential;
/// no endpoint accepts or verifies it.
const OPAQUE_TOKEN: &str = "fake-jwt-token";

/// Signup request body.
///
/// The `access_key_hash` field carries the caller's plaintext access key
/// despite its name; hashing happens server-side.
#[derive(Debug, Deserialize)]
pub(super) struct SignupBody {
    #[serde(default)]
    identity_handle: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    access_key_hash: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub(super) struct LoginBody {
    #[serde(default)]
    identity_handle: String,
    #[serde(default)]
    access_key_hash: String,
}

/// Wire representation of an identity record.
///
/// `access_key_hash` exposes the stored PHC hash string. The original
/// service returned it on every identity response and clients rely on the
/// field being present, so it is kept on the wire as-is.
#[derive(Debug, Serialize)]
pub(super) struct IdentityPayload {
    id: String,
    identity_handle: String,
    email: String,
    access_key_hash: String,
    node_id: String,
    system_status: &'static str,
    clearance_level: i32,
    initialized_at: DateTime<Utc>,
    last_uplink: DateTime<Utc>,
}

impl From<&Identity> for IdentityPayload {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id().to_string(),
            identity_handle: identity.handle().as_str().to_owned(),
            email: identity.email().as_str().to_owned(),
            access_key_hash: identity.secret_hash().as_str().to_owned(),
            node_id: identity.node_tag().as_str().to_owned(),
            system_status: identity.status().as_str(),
            clearance_level: identity.clearance_level(),
            initialized_at: identity.created_at(),
            last_uplink: identity.last_seen_at(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SignupResponse {
    status: &'static str,
    message: String,
    payload: IdentityPayload,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    status: &'static str,
    message: String,
    token: &'static str,
    user: IdentityPayload,
}

/// `POST /api/signup` — initializes a new identity.
pub(super) async fn signup<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Json(body): Json<SignupBody>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let identity = state
        .identity
        .signup(SignupRequest::new(
            body.identity_handle,
            body.email,
            body.access_key_hash,
        ))
        .await?;

    let response = SignupResponse {
        status: "IDENTITY_INITIALIZED",
        message: format!("NODE ACCESS GRANTED FOR {}", identity.node_tag()),
        payload: IdentityPayload::from(&identity),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /api/login` — authenticates an identity and refreshes its uplink.
pub(super) async fn login<CR, OR, C>(
    State(state): State<AppState<CR, OR, C>>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, ApiError>
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let identity = state
        .identity
        .login(LoginRequest::new(body.identity_handle, body.access_key_hash))
        .await?;

    let response = LoginResponse {
        status: "ACCESS_GRANTED",
        message: format!("WELCOME BACK, {}", identity.node_tag()),
        token: OPAQUE_TOKEN,
        user: IdentityPayload::from(&identity),
    };
    Ok((StatusCode::OK, Json(response)))
}
