//! HTTP error mapping for the inbound adapter.
//!
//! Service-level errors are translated into themed JSON bodies of the form
//! `{status, message}`. Internal failures are logged and surface only a
//! generic message.

use crate::identity::services::IdentityServiceError;
use crate::operation::{ports::OperationRepositoryError, services::OperationLifecycleError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Identity signup or login failed.
    #[error(transparent)]
    Identity(#[from] IdentityServiceError),

    /// Operation lifecycle call failed.
    #[error(transparent)]
    Operation(#[from] OperationLifecycleError),

    /// The path segment is not a well-formed operation identifier.
    #[error("malformed operation identifier: {0}")]
    MalformedOperationId(String),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

impl ApiError {
    fn into_parts(self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Identity(err) => identity_parts(err),
            Self::Operation(err) => operation_parts(err),
            Self::MalformedOperationId(raw) => (
                StatusCode::NOT_FOUND,
                "SYSTEM_FAILURE",
                format!("OPERATION_NOT_FOUND: {raw}"),
            ),
        }
    }
}

fn identity_parts(err: IdentityServiceError) -> (StatusCode, &'static str, String) {
    match err {
        IdentityServiceError::Domain(domain) => (
            StatusCode::BAD_REQUEST,
            "AUTH_FAILURE",
            format!("INSUFFICIENT_DATA: {domain}"),
        ),
        IdentityServiceError::HandleOrEmailTaken(_) => (
            StatusCode::CONFLICT,
            "CONFLICT",
            "IDENTITY_HANDLE or EMAIL already exists in the central mainframe.".to_owned(),
        ),
        IdentityServiceError::IdentityNotFound(_) => (
            StatusCode::NOT_FOUND,
            "AUTH_FAILURE",
            "IDENTITY_NOT_FOUND: Access denied.".to_owned(),
        ),
        IdentityServiceError::InvalidSecret => (
            StatusCode::UNAUTHORIZED,
            "AUTH_FAILURE",
            "INVALID_ACCESS_KEY: Authentication failed.".to_owned(),
        ),
        IdentityServiceError::Hashing(source) => internal("PROTOCOL_ERROR", &source),
        IdentityServiceError::Repository(source) => internal("PROTOCOL_ERROR", &source),
    }
}

fn operation_parts(err: OperationLifecycleError) -> (StatusCode, &'static str, String) {
    match err {
        OperationLifecycleError::Domain(domain) => (
            StatusCode::BAD_REQUEST,
            "DEPLOYMENT_FAILED",
            format!("VALIDATION_ERROR: {domain}"),
        ),
        OperationLifecycleError::Repository(OperationRepositoryError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            "SYSTEM_FAILURE",
            format!("OPERATION_NOT_FOUND: {id}"),
        ),
        OperationLifecycleError::Repository(source) => internal("SYSTEM_FAILURE", &source),
    }
}

fn internal(
    status: &'static str,
    source: &(dyn std::error::Error + 'static),
) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %source, "internal failure while handling request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        status,
        "Internal system failure.".to_owned(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, status, message) = self.into_parts();
        (code, Json(ErrorBody { status, message })).into_response()
    }
}
