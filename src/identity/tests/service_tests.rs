//! Service orchestration tests for identity signup and login.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::identity::{
    adapters::memory::InMemoryCredentialRepository,
    services::{IdentityService, IdentityServiceError, LoginRequest, SignupRequest},
};
use chrono::{DateTime, Duration, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

type TestService = IdentityService<InMemoryCredentialRepository, DefaultClock>;

/// Clock that advances one second on every reading.
struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    fn new() -> Self {
        Self {
            start: Utc::now(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

#[fixture]
fn service() -> TestService {
    IdentityService::new(
        Arc::new(InMemoryCredentialRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signup_persists_and_is_retrievable_by_handle(service: TestService) {
    let created = service
        .signup(SignupRequest::new("Alice", "a@x.com", "correct"))
        .await
        .expect("signup should succeed");

    let fetched = service
        .find_by_handle("alice")
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signup_never_stores_the_plaintext_secret(service: TestService) {
    let created = service
        .signup(SignupRequest::new("alice", "a@x.com", "correct"))
        .await
        .expect("signup should succeed");

    assert_ne!(created.secret_hash().as_str(), "correct");
}

#[rstest]
#[case("alice", "other@x.com")]
#[case("bob", "a@x.com")]
#[tokio::test(flavor = "multi_thread")]
async fn signup_rejects_duplicate_handle_or_email(
    service: TestService,
    #[case] handle: &str,
    #[case] email: &str,
) {
    service
        .signup(SignupRequest::new("alice", "a@x.com", "correct"))
        .await
        .expect("first signup should succeed");

    let result = service
        .signup(SignupRequest::new(handle, email, "irrelevant"))
        .await;

    assert!(matches!(
        result,
        Err(IdentityServiceError::HandleOrEmailTaken(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_case_variants_count_as_duplicates(service: TestService) {
    service
        .signup(SignupRequest::new("Alice", "A@X.com", "correct"))
        .await
        .expect("first signup should succeed");

    let result = service
        .signup(SignupRequest::new("ALICE", "fresh@x.com", "irrelevant"))
        .await;

    assert!(matches!(
        result,
        Err(IdentityServiceError::HandleOrEmailTaken(_))
    ));
}

#[rstest]
#[case("", "a@x.com", "secret")]
#[case("alice", "", "secret")]
#[case("alice", "a@x.com", "")]
#[tokio::test(flavor = "multi_thread")]
async fn signup_rejects_missing_fields(
    service: TestService,
    #[case] handle: &str,
    #[case] email: &str,
    #[case] secret: &str,
) {
    let result = service
        .signup(SignupRequest::new(handle, email, secret))
        .await;
    assert!(matches!(result, Err(IdentityServiceError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_advances_last_seen_strictly_past_creation() {
    let service = IdentityService::new(
        Arc::new(InMemoryCredentialRepository::new()),
        Arc::new(SteppingClock::new()),
    );

    let created = service
        .signup(SignupRequest::new("alice", "a@x.com", "correct"))
        .await
        .expect("signup should succeed");

    let logged_in = service
        .login(LoginRequest::new("alice", "correct"))
        .await
        .expect("login should succeed");

    assert_eq!(logged_in.id(), created.id());
    assert!(logged_in.last_seen_at() > created.last_seen_at());

    let fetched = service
        .find_by_handle("alice")
        .await
        .expect("lookup should succeed")
        .expect("identity should exist");
    assert_eq!(fetched.last_seen_at(), logged_in.last_seen_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_accepts_case_variant_handle(service: TestService) {
    service
        .signup(SignupRequest::new("alice", "a@x.com", "correct"))
        .await
        .expect("signup should succeed");

    let result = service.login(LoginRequest::new("ALICE", "correct")).await;
    assert!(result.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_with_wrong_secret_is_rejected(service: TestService) {
    service
        .signup(SignupRequest::new("alice", "a@x.com", "correct"))
        .await
        .expect("signup should succeed");

    let result = service.login(LoginRequest::new("alice", "wrong")).await;
    assert!(matches!(result, Err(IdentityServiceError::InvalidSecret)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_with_unknown_handle_is_rejected(service: TestService) {
    let result = service.login(LoginRequest::new("nobody", "x")).await;
    assert!(matches!(
        result,
        Err(IdentityServiceError::IdentityNotFound(_))
    ));
}

#[rstest]
#[case("", "secret")]
#[case("alice", "")]
#[tokio::test(flavor = "multi_thread")]
async fn login_rejects_missing_fields(
    service: TestService,
    #[case] handle: &str,
    #[case] secret: &str,
) {
    let result = service.login(LoginRequest::new(handle, secret)).await;
    assert!(matches!(result, Err(IdentityServiceError::Domain(_))));
}
