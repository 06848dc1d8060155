//! Service orchestration tests for operation lifecycle.

use std::sync::Arc;

use crate::operation::{
    adapters::memory::InMemoryOperationRepository,
    domain::{AgentId, ExecutionStatus, Operation, OperationId, ThreatLevel},
    ports::OperationRepositoryError,
    services::{DeployOperationRequest, OperationLifecycleError, OperationLifecycleService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = OperationLifecycleService<InMemoryOperationRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    OperationLifecycleService::new(
        Arc::new(InMemoryOperationRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[fixture]
fn agent() -> AgentId {
    AgentId::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deploy_then_list_returns_the_operation_with_defaults(
    service: TestService,
    agent: AgentId,
) {
    let deployed = service
        .deploy(DeployOperationRequest::new("Buy milk", agent.to_string()))
        .await
        .expect("deploy should succeed");

    let listed = service
        .list(&agent.to_string())
        .await
        .expect("list should succeed");

    assert_eq!(listed, vec![deployed.clone()]);
    assert_eq!(deployed.execution_status(), ExecutionStatus::Initialized);
    assert_eq!(deployed.threat_level(), ThreatLevel::LowThreat);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deploy_requires_a_directive(service: TestService, agent: AgentId) {
    let result = service
        .deploy(DeployOperationRequest::new("   ", agent.to_string()))
        .await;
    assert!(matches!(result, Err(OperationLifecycleError::Domain(_))));
}

#[rstest]
#[case("")]
#[case("not-a-uuid")]
#[tokio::test(flavor = "multi_thread")]
async fn deploy_requires_a_valid_agent_ref(service: TestService, #[case] agent_ref: &str) {
    let result = service
        .deploy(DeployOperationRequest::new("Valid directive", agent_ref))
        .await;
    assert!(matches!(result, Err(OperationLifecycleError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deploy_rejects_unknown_threat_level(service: TestService, agent: AgentId) {
    let result = service
        .deploy(
            DeployOperationRequest::new("Check perimeter", agent.to_string())
                .with_threat_level("APOCALYPTIC"),
        )
        .await;
    assert!(matches!(result, Err(OperationLifecycleError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deploy_accepts_explicit_threat_level(service: TestService, agent: AgentId) {
    let deployed = service
        .deploy(
            DeployOperationRequest::new("Check perimeter", agent.to_string())
                .with_threat_level("HIGH_THREAT"),
        )
        .await
        .expect("deploy should succeed");
    assert_eq!(deployed.threat_level(), ThreatLevel::HighThreat);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_newest_first(service: TestService, agent: AgentId) {
    let first = service
        .deploy(DeployOperationRequest::new("first", agent.to_string()))
        .await
        .expect("deploy should succeed");
    let second = service
        .deploy(DeployOperationRequest::new("second", agent.to_string()))
        .await
        .expect("deploy should succeed");
    let third = service
        .deploy(DeployOperationRequest::new("third", agent.to_string()))
        .await
        .expect("deploy should succeed");

    let listed = service
        .list(&agent.to_string())
        .await
        .expect("list should succeed");
    let ids: Vec<_> = listed.iter().map(Operation::id).collect();

    assert_eq!(ids, vec![third.id(), second.id(), first.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_for_unknown_agent_is_empty(service: TestService, agent: AgentId) {
    let listed = service
        .list(&agent.to_string())
        .await
        .expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_only_returns_the_owners_operations(service: TestService) {
    let owner = AgentId::new();
    let other = AgentId::new();
    service
        .deploy(DeployOperationRequest::new("mine", owner.to_string()))
        .await
        .expect("deploy should succeed");
    service
        .deploy(DeployOperationRequest::new("theirs", other.to_string()))
        .await
        .expect("deploy should succeed");

    let listed = service
        .list(&owner.to_string())
        .await
        .expect("list should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|op| op.directive().as_str()), Some("mine"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggle_execution_twice_round_trips(service: TestService, agent: AgentId) {
    let deployed = service
        .deploy(DeployOperationRequest::new("Round trip", agent.to_string()))
        .await
        .expect("deploy should succeed");

    let toggled = service
        .toggle_execution(deployed.id())
        .await
        .expect("toggle should succeed");
    assert_eq!(toggled.execution_status(), ExecutionStatus::Terminated);

    let restored = service
        .toggle_execution(deployed.id())
        .await
        .expect("toggle should succeed");
    assert_eq!(restored.execution_status(), deployed.execution_status());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggle_threat_star_round_trip_ends_low(service: TestService, agent: AgentId) {
    let deployed = service
        .deploy(DeployOperationRequest::new("Star me", agent.to_string()))
        .await
        .expect("deploy should succeed");

    let starred = service
        .toggle_threat(deployed.id())
        .await
        .expect("toggle should succeed");
    assert_eq!(starred.threat_level(), ThreatLevel::Critical);

    let unstarred = service
        .toggle_threat(deployed.id())
        .await
        .expect("toggle should succeed");
    assert_eq!(unstarred.threat_level(), ThreatLevel::LowThreat);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggles_on_missing_operations_are_not_found(service: TestService) {
    let missing = OperationId::new();

    let execution = service.toggle_execution(missing).await;
    assert!(matches!(
        execution,
        Err(OperationLifecycleError::Repository(
            OperationRepositoryError::NotFound(_)
        ))
    ));

    let threat = service.toggle_threat(missing).await;
    assert!(matches!(
        threat,
        Err(OperationLifecycleError::Repository(
            OperationRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_and_second_remove_is_not_found(service: TestService, agent: AgentId) {
    let deployed = service
        .deploy(DeployOperationRequest::new("Remove me", agent.to_string()))
        .await
        .expect("deploy should succeed");

    service
        .remove(deployed.id())
        .await
        .expect("remove should succeed");

    let listed = service
        .list(&agent.to_string())
        .await
        .expect("list should succeed");
    assert!(listed.is_empty());

    let second = service.remove(deployed.id()).await;
    assert!(matches!(
        second,
        Err(OperationLifecycleError::Repository(
            OperationRepositoryError::NotFound(_)
        ))
    ));
}
