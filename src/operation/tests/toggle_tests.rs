//! Unit tests for the execution and threat toggle rules.

use crate::operation::domain::{ExecutionStatus, ThreatLevel};
use rstest::rstest;

#[rstest]
#[case(ExecutionStatus::Initialized, ExecutionStatus::Terminated)]
#[case(ExecutionStatus::InProgress, ExecutionStatus::Terminated)]
#[case(ExecutionStatus::Failed, ExecutionStatus::Terminated)]
#[case(ExecutionStatus::Terminated, ExecutionStatus::Initialized)]
fn execution_toggle_follows_two_state_rule(
    #[case] from: ExecutionStatus,
    #[case] expected: ExecutionStatus,
) {
    assert_eq!(from.toggled(), expected);
}

#[rstest]
fn execution_toggle_round_trips_for_the_initialized_pair() {
    let original = ExecutionStatus::Initialized;
    assert_eq!(original.toggled().toggled(), original);
}

#[rstest]
fn in_progress_and_failed_do_not_round_trip() {
    // The toggle collapses these into the TERMINATED/INITIALIZED pair; they
    // are reachable only by direct write.
    assert_eq!(
        ExecutionStatus::InProgress.toggled().toggled(),
        ExecutionStatus::Initialized
    );
    assert_eq!(
        ExecutionStatus::Failed.toggled().toggled(),
        ExecutionStatus::Initialized
    );
}

#[rstest]
#[case(ThreatLevel::LowThreat, ThreatLevel::Critical)]
#[case(ThreatLevel::MediumThreat, ThreatLevel::Critical)]
#[case(ThreatLevel::HighThreat, ThreatLevel::Critical)]
#[case(ThreatLevel::Critical, ThreatLevel::LowThreat)]
fn threat_toggle_collapses_to_the_critical_pair(
    #[case] from: ThreatLevel,
    #[case] expected: ThreatLevel,
) {
    assert_eq!(from.toggled(), expected);
}

#[rstest]
#[case(ThreatLevel::MediumThreat)]
#[case(ThreatLevel::HighThreat)]
fn mid_levels_lose_their_value_across_a_star_round_trip(#[case] level: ThreatLevel) {
    assert_eq!(level.toggled().toggled(), ThreatLevel::LowThreat);
}

#[rstest]
fn only_critical_counts_as_starred() {
    assert!(ThreatLevel::Critical.is_critical());
    assert!(!ThreatLevel::LowThreat.is_critical());
    assert!(!ThreatLevel::MediumThreat.is_critical());
    assert!(!ThreatLevel::HighThreat.is_critical());
}
