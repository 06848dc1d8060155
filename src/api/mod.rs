//! HTTP inbound adapter.
//!
//! Translates the wire protocol into service calls: typed request bodies,
//! themed response envelopes, and error-to-status mapping. The router is
//! generic over the repository and clock implementations so tests can run it
//! against the in-memory adapters.

mod error;
mod identity;
mod operations;

pub use error::ApiError;

use crate::identity::{ports::CredentialRepository, services::IdentityService};
use crate::operation::{ports::OperationRepository, services::OperationLifecycleService};
use axum::{
    Router,
    routing::{get, patch, post},
};
use mockable::Clock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared handler state: the two application services.
pub struct AppState<CR, OR, C>
where
    CR: CredentialRepository,
    OR: OperationRepository,
    C: Clock + Send + Sync,
{
    /// Identity signup and login service.
    pub identity: IdentityService<CR, C>,
    /// Operation lifecycle service.
    pub operations: OperationLifecycleService<OR, C>,
}

impl<CR, OR, C> AppState<CR, OR, C>
where
    CR: CredentialRepository,
    OR: OperationRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state from the two services.
    #[must_use]
    pub const fn new(
        identity: IdentityService<CR, C>,
        operations: OperationLifecycleService<OR, C>,
    ) -> Self {
        Self {
            identity,
            operations,
        }
    }
}

impl<CR, OR, C> Clone for AppState<CR, OR, C>
where
    CR: CredentialRepository,
    OR: OperationRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            operations: self.operations.clone(),
        }
    }
}

/// Builds the API router over the given state.
///
/// CORS is wide open, matching the service's browser-facing deployment, and
/// every request is traced at the HTTP layer.
pub fn router<CR, OR, C>(state: AppState<CR, OR, C>) -> Router
where
    CR: CredentialRepository + 'static,
    OR: OperationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/signup", post(identity::signup))
        .route("/api/login", post(identity::login))
        .route("/api/operations", post(operations::deploy))
        .route(
            "/api/operations/:id",
            get(operations::list).delete(operations::remove),
        )
        .route(
            "/api/operations/:id/toggle",
            patch(operations::toggle_execution),
        )
        .route("/api/operations/:id/star", patch(operations::toggle_threat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
