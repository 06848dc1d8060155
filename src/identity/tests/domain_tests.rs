//! Unit tests for identity domain types.

use crate::identity::domain::{
    EmailAddress, Handle, Identity, IdentityDomainError, IdentityStatus, NodeTag, RawSecret,
    SecretHash,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case("Ghost", "ghost")]
#[case("  RAZOR  ", "razor")]
#[case("wraith", "wraith")]
fn handle_is_trimmed_and_lowercased(#[case] input: &str, #[case] expected: &str) {
    let handle = Handle::new(input).expect("valid handle");
    assert_eq!(handle.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_handle_is_rejected(#[case] input: &str) {
    assert_eq!(Handle::new(input), Err(IdentityDomainError::EmptyHandle));
}

#[rstest]
fn overlong_handle_is_rejected() {
    let input = "h".repeat(101);
    assert!(matches!(
        Handle::new(input),
        Err(IdentityDomainError::HandleTooLong(_))
    ));
}

#[rstest]
fn equal_handles_differ_only_by_case() {
    let upper = Handle::new("GHOST").expect("valid handle");
    let lower = Handle::new("ghost").expect("valid handle");
    assert_eq!(upper, lower);
}

#[rstest]
#[case("Agent@Mainframe.Net", "agent@mainframe.net")]
#[case("  a@x.com ", "a@x.com")]
fn email_is_trimmed_and_lowercased(#[case] input: &str, #[case] expected: &str) {
    let email = EmailAddress::new(input).expect("valid email");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("no-at-sign")]
#[case("@domain.only")]
#[case("local@")]
#[case("two@at@signs")]
fn malformed_email_is_rejected(#[case] input: &str) {
    assert!(matches!(
        EmailAddress::new(input),
        Err(IdentityDomainError::InvalidEmail(_))
    ));
}

#[rstest]
fn empty_email_is_rejected() {
    assert_eq!(
        EmailAddress::new("  "),
        Err(IdentityDomainError::EmptyEmail)
    );
}

#[rstest]
fn secret_hash_is_never_the_plaintext() {
    let secret = RawSecret::new("open-sesame").expect("valid secret");
    let hash = SecretHash::derive(&secret).expect("hashing succeeds");
    assert_ne!(hash.as_str(), "open-sesame");
    assert!(hash.as_str().starts_with("$argon2"));
}

#[rstest]
fn same_secret_hashes_to_different_values() {
    let secret = RawSecret::new("same-secret").expect("valid secret");
    let first = SecretHash::derive(&secret).expect("hashing succeeds");
    let second = SecretHash::derive(&secret).expect("hashing succeeds");

    assert_ne!(first, second);
    assert!(first.verify(&secret).expect("verification succeeds"));
    assert!(second.verify(&secret).expect("verification succeeds"));
}

#[rstest]
fn wrong_secret_fails_verification() {
    let secret = RawSecret::new("correct").expect("valid secret");
    let wrong = RawSecret::new("wrong").expect("valid secret");
    let hash = SecretHash::derive(&secret).expect("hashing succeeds");
    assert!(!hash.verify(&wrong).expect("verification succeeds"));
}

#[rstest]
fn malformed_persisted_hash_errors_on_verify() {
    let hash = SecretHash::from_persisted("not-a-phc-string".to_owned());
    let secret = RawSecret::new("anything").expect("valid secret");
    assert!(hash.verify(&secret).is_err());
}

#[rstest]
fn raw_secret_debug_is_redacted() {
    let secret = RawSecret::new("super-secret").expect("valid secret");
    let rendered = format!("{secret:?}");
    assert!(!rendered.contains("super-secret"));
}

#[rstest]
fn new_identity_has_ready_defaults() {
    let handle = Handle::new("ghost").expect("valid handle");
    let email = EmailAddress::new("ghost@mainframe.net").expect("valid email");
    let secret = RawSecret::new("key").expect("valid secret");
    let hash = SecretHash::derive(&secret).expect("hashing succeeds");

    let identity = Identity::new(handle, email, hash, &DefaultClock);

    assert_eq!(identity.status(), IdentityStatus::Ready);
    assert_eq!(identity.clearance_level(), 1);
    assert_eq!(identity.created_at(), identity.last_seen_at());
}

#[rstest]
fn node_tag_has_fixed_prefix_and_four_digits() {
    let tag = NodeTag::generate();
    let suffix = tag
        .as_str()
        .strip_prefix("NODE-")
        .expect("tag has NODE- prefix");
    assert_eq!(suffix.len(), 4);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));
}

#[rstest]
#[case(IdentityStatus::Ready, "READY")]
#[case(IdentityStatus::Offline, "OFFLINE")]
#[case(IdentityStatus::Maintenance, "MAINTENANCE")]
#[case(IdentityStatus::Compromised, "COMPROMISED")]
fn identity_status_round_trips_storage_form(#[case] status: IdentityStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(IdentityStatus::try_from(text), Ok(status));
}

#[rstest]
fn unknown_identity_status_fails_to_parse() {
    assert!(IdentityStatus::try_from("DEFRAGMENTING").is_err());
}
