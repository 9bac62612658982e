use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use hotel_marketplace_api::{
    auth::domain::model::enums::user_role::UserRole,
    reviews::interfaces::rest::{
        controllers::reviews_rest_controller::{delete_review, get_review, update_review},
        resources::update_review_request_resource::UpdateReviewRequestResource,
    },
};
use uuid::Uuid;

use crate::support::{create_reviews_harness, review_record};

fn authorized_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", "Bearer valid-token".parse().unwrap());
    headers
}

#[tokio::test]
async fn get_review_returns_record() {
    let harness = create_reviews_harness(10);
    let record = review_record(4, "great stay");
    let record_id = record.id;
    harness.repository.insert_record(record);

    let response = get_review(State(harness.state.clone()), Path(record_id))
        .await
        .expect("review expected");

    assert_eq!(response.review.rating, 4);
    assert_eq!(response.review.comment, "great stay");
}

#[tokio::test]
async fn get_review_returns_not_found_for_unknown_id() {
    let harness = create_reviews_harness(10);

    let error = get_review(State(harness.state.clone()), Path(Uuid::now_v7()))
        .await
        .expect_err("missing review should fail");

    assert_eq!(error.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_review_requires_authentication() {
    let harness = create_reviews_harness(10);
    let record = review_record(4, "great stay");
    let record_id = record.id;
    harness.repository.insert_record(record);

    let error = update_review(
        State(harness.state.clone()),
        Path(record_id),
        HeaderMap::new(),
        Json(UpdateReviewRequestResource {
            rating: Some(2),
            comment: None,
        }),
    )
    .await
    .expect_err("unauthenticated update should fail");

    assert_eq!(error.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_review_applies_partial_changes() {
    let harness = create_reviews_harness(10);
    harness.guard.authenticate_as(UserRole::Guest);
    let record = review_record(4, "great stay");
    let record_id = record.id;
    harness.repository.insert_record(record);

    let response = update_review(
        State(harness.state.clone()),
        Path(record_id),
        authorized_headers(),
        Json(UpdateReviewRequestResource {
            rating: Some(2),
            comment: None,
        }),
    )
    .await
    .expect("update succeeds");

    assert_eq!(response.review.rating, 2);
    assert_eq!(response.review.comment, "great stay");
}

#[tokio::test]
async fn update_review_rejects_out_of_range_rating() {
    let harness = create_reviews_harness(10);
    harness.guard.authenticate_as(UserRole::Guest);
    let record = review_record(4, "great stay");
    let record_id = record.id;
    harness.repository.insert_record(record);

    let error = update_review(
        State(harness.state.clone()),
        Path(record_id),
        authorized_headers(),
        Json(UpdateReviewRequestResource {
            rating: Some(9),
            comment: None,
        }),
    )
    .await
    .expect_err("invalid rating should fail");

    assert_eq!(error.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_review_removes_record() {
    let harness = create_reviews_harness(10);
    harness.guard.authenticate_as(UserRole::Guest);
    let record = review_record(4, "great stay");
    let record_id = record.id;
    harness.repository.insert_record(record);

    let response = delete_review(
        State(harness.state.clone()),
        Path(record_id),
        authorized_headers(),
    )
    .await
    .expect("deletion succeeds");

    assert_eq!(response.message, "Review deleted successfully");

    let error = get_review(State(harness.state.clone()), Path(record_id))
        .await
        .expect_err("review should be gone");
    assert_eq!(error.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mutations_are_rate_limited_with_retry_after() {
    let harness = create_reviews_harness(1);
    harness.guard.authenticate_as(UserRole::Guest);
    let record = review_record(4, "great stay");
    let record_id = record.id;
    harness.repository.insert_record(record);

    delete_review(
        State(harness.state.clone()),
        Path(record_id),
        authorized_headers(),
    )
    .await
    .expect("first mutation is allowed");

    let error = delete_review(
        State(harness.state.clone()),
        Path(record_id),
        authorized_headers(),
    )
    .await
    .expect_err("second mutation should be throttled");

    assert_eq!(error.0, StatusCode::TOO_MANY_REQUESTS);
    let retry_after = error
        .1
        .get("retry-after")
        .expect("retry-after header expected")
        .to_str()
        .expect("header is ascii")
        .parse::<u64>()
        .expect("header is seconds");
    assert!(retry_after <= 60);
}
