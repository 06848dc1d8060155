//! Application services for identity orchestration.

mod auth;

pub use auth::{
    IdentityService, IdentityServiceError, IdentityServiceResult, LoginRequest, SignupRequest,
};
