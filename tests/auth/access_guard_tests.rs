use hotel_marketplace_api::auth::domain::{
    model::enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
    services::access_guard_service::AccessGuardService,
};

use crate::support::{PARTNER_SUBJECT_ID, bearer, create_guard_harness, user_record_with_role};

#[tokio::test]
async fn require_authenticated_fails_without_bearer_header() {
    let harness = create_guard_harness();

    let result = harness.guard.handle_require_authenticated(None).await;

    assert!(matches!(result, Err(AuthDomainError::Unauthenticated)));
}

#[tokio::test]
async fn require_authenticated_fails_for_rejected_token() {
    let harness = create_guard_harness();
    harness.identity_facade.set_invalid("bad signature");

    let result = harness
        .guard
        .handle_require_authenticated(Some(&bearer("tampered")))
        .await;

    assert!(matches!(result, Err(AuthDomainError::Unauthenticated)));
}

#[tokio::test]
async fn require_authenticated_returns_principal_for_valid_token() {
    let harness = create_guard_harness();
    harness
        .identity_facade
        .set_claims(Some("u1"), None, Some("a@b.com"));

    let principal = harness
        .guard
        .handle_require_authenticated(Some(&bearer("valid-token")))
        .await
        .expect("principal expected");

    assert_eq!(principal.subject_id.value(), "u1");
    assert_eq!(principal.role, UserRole::Guest);
}

#[tokio::test]
async fn require_role_rejects_partner_requiring_admin() {
    let harness = create_guard_harness();
    harness
        .identity_facade
        .set_claims(Some(PARTNER_SUBJECT_ID), None, None);
    harness.user_repository.insert_record(user_record_with_role(
        PARTNER_SUBJECT_ID,
        "partner@example.com",
        UserRole::Partner,
    ));

    let result = harness
        .guard
        .handle_require_role(Some(&bearer("valid-token")), UserRole::Admin)
        .await;

    assert!(matches!(result, Err(AuthDomainError::Forbidden)));
}

#[tokio::test]
async fn require_role_allows_exact_match() {
    let harness = create_guard_harness();
    harness
        .identity_facade
        .set_claims(Some(PARTNER_SUBJECT_ID), None, None);
    harness.user_repository.insert_record(user_record_with_role(
        PARTNER_SUBJECT_ID,
        "partner@example.com",
        UserRole::Partner,
    ));

    let principal = harness
        .guard
        .handle_require_role(Some(&bearer("valid-token")), UserRole::Partner)
        .await
        .expect("principal expected");

    assert_eq!(principal.role, UserRole::Partner);
}

#[tokio::test]
async fn require_role_allows_admin_for_every_role() {
    let harness = create_guard_harness();
    harness
        .identity_facade
        .set_claims(Some("admin-subject"), None, None);
    harness.user_repository.insert_record(user_record_with_role(
        "admin-subject",
        "admin@example.com",
        UserRole::Admin,
    ));

    for required in [UserRole::Guest, UserRole::Partner, UserRole::Admin] {
        let principal = harness
            .guard
            .handle_require_role(Some(&bearer("valid-token")), required)
            .await
            .expect("admin satisfies every role check");

        assert_eq!(principal.role, UserRole::Admin);
    }
}

#[tokio::test]
async fn require_role_fails_unauthenticated_before_forbidden() {
    let harness = create_guard_harness();

    let result = harness
        .guard
        .handle_require_role(None, UserRole::Admin)
        .await;

    assert!(matches!(result, Err(AuthDomainError::Unauthenticated)));
}
