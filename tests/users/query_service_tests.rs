use hotel_marketplace_api::users::domain::{
    model::{
        enums::users_domain_error::UsersDomainError, queries::find_user_query::FindUserQuery,
    },
    services::user_query_service::UserQueryService,
};

use crate::support::{create_users_harness, guest_record};

#[tokio::test]
async fn find_prefers_external_id() {
    let harness = create_users_harness();
    harness
        .repository
        .insert_record(guest_record(Some("u1"), "a@b.com"));
    harness
        .repository
        .insert_record(guest_record(Some("u2"), "other@b.com"));

    let query = FindUserQuery::new(Some("u1".to_string()), Some("other@b.com".to_string()))
        .expect("valid query");
    let record = harness
        .query_service
        .handle_find_user(query)
        .await
        .expect("lookup succeeds")
        .expect("record expected");

    assert_eq!(record.external_id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn find_falls_back_to_email() {
    let harness = create_users_harness();
    harness
        .repository
        .insert_record(guest_record(None, "a@b.com"));

    let query = FindUserQuery::new(Some("u1".to_string()), Some("a@b.com".to_string()))
        .expect("valid query");
    let record = harness
        .query_service
        .handle_find_user(query)
        .await
        .expect("lookup succeeds")
        .expect("record expected");

    assert_eq!(record.email, "a@b.com");
    assert!(record.external_id.is_none());
}

#[tokio::test]
async fn find_returns_none_when_absent() {
    let harness = create_users_harness();

    let query = FindUserQuery::new(Some("unknown".to_string()), None).expect("valid query");
    let record = harness
        .query_service
        .handle_find_user(query)
        .await
        .expect("lookup succeeds");

    assert!(record.is_none());
}

#[tokio::test]
async fn find_query_requires_criteria() {
    let result = FindUserQuery::new(None, Some("   ".to_string()));

    assert!(matches!(
        result,
        Err(UsersDomainError::MissingLookupCriteria)
    ));
}
