use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::RETRY_AFTER},
    routing::{delete, get, patch},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::domain::{
        model::enums::auth_domain_error::AuthDomainError,
        services::access_guard_service::AccessGuardService,
    },
    reviews::{
        domain::model::enums::reviews_domain_error::ReviewsDomainError,
        infrastructure::persistence::repositories::review_record_repository::{
            ReviewRecordRepository, ReviewUpdateCriteria,
        },
        interfaces::rest::resources::{
            review_response_resource::{
                ReviewDeletedResponseResource, ReviewResource, ReviewResponseResource,
            },
            reviews_error_response_resource::ReviewsErrorResponseResource,
            update_review_request_resource::UpdateReviewRequestResource,
        },
    },
    shared::rate_limiting::fixed_window_rate_limiter::{
        FixedWindowRateLimiter, RateLimitDecision,
    },
};

#[derive(Clone)]
pub struct ReviewsRestControllerState {
    pub repository: Arc<dyn ReviewRecordRepository>,
    pub access_guard_service: Arc<dyn AccessGuardService>,
    pub rate_limiter: Arc<FixedWindowRateLimiter>,
}

pub fn router(state: ReviewsRestControllerState) -> Router {
    Router::new()
        .route("/api/reviews/:id", get(get_review))
        .route("/api/reviews/:id", patch(update_review))
        .route("/api/reviews/:id", delete(delete_review))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review found", body = ReviewResponseResource),
        (status = 404, description = "Review not found", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn get_review(
    State(state): State<ReviewsRestControllerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReviewResponseResource>, (StatusCode, Json<ReviewsErrorResponseResource>)> {
    let record = state
        .repository
        .find_by_id(id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(ReviewsDomainError::ReviewNotFound))?;

    Ok(Json(ReviewResponseResource {
        review: ReviewResource::from_record(record),
    }))
}

#[utoipa::path(
    patch,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    request_body = UpdateReviewRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Review updated", body = ReviewResponseResource),
        (status = 400, description = "Invalid request", body = ReviewsErrorResponseResource),
        (status = 401, description = "Missing or invalid credential", body = ReviewsErrorResponseResource),
        (status = 404, description = "Review not found", body = ReviewsErrorResponseResource),
        (status = 429, description = "Rate limited", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn update_review(
    State(state): State<ReviewsRestControllerState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateReviewRequestResource>,
) -> Result<
    Json<ReviewResponseResource>,
    (StatusCode, HeaderMap, Json<ReviewsErrorResponseResource>),
> {
    if let RateLimitDecision::Deny {
        retry_after_seconds,
    } = state
        .rate_limiter
        .check(&client_address(&headers), "/api/reviews/:id")
    {
        return Err(rate_limited(retry_after_seconds));
    }

    if let Err(validation_error) = request.validate() {
        return Err(without_headers((
            StatusCode::BAD_REQUEST,
            Json(ReviewsErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )));
    }

    let authorization = bearer_header(&headers);
    state
        .access_guard_service
        .handle_require_authenticated(authorization.as_deref())
        .await
        .map_err(map_guard_error)?;

    let record = state
        .repository
        .update(
            id,
            ReviewUpdateCriteria {
                rating: request.rating,
                comment: request.comment,
            },
        )
        .await
        .map_err(|e| without_headers(map_domain_error(e)))?
        .ok_or_else(|| without_headers(map_domain_error(ReviewsDomainError::ReviewNotFound)))?;

    Ok(Json(ReviewResponseResource {
        review: ReviewResource::from_record(record),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Review deleted", body = ReviewDeletedResponseResource),
        (status = 401, description = "Missing or invalid credential", body = ReviewsErrorResponseResource),
        (status = 404, description = "Review not found", body = ReviewsErrorResponseResource),
        (status = 429, description = "Rate limited", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn delete_review(
    State(state): State<ReviewsRestControllerState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<
    Json<ReviewDeletedResponseResource>,
    (StatusCode, HeaderMap, Json<ReviewsErrorResponseResource>),
> {
    if let RateLimitDecision::Deny {
        retry_after_seconds,
    } = state
        .rate_limiter
        .check(&client_address(&headers), "/api/reviews/:id")
    {
        return Err(rate_limited(retry_after_seconds));
    }

    let authorization = bearer_header(&headers);
    state
        .access_guard_service
        .handle_require_authenticated(authorization.as_deref())
        .await
        .map_err(map_guard_error)?;

    let deleted = state
        .repository
        .delete(id)
        .await
        .map_err(|e| without_headers(map_domain_error(e)))?;

    if !deleted {
        return Err(without_headers(map_domain_error(
            ReviewsDomainError::ReviewNotFound,
        )));
    }

    Ok(Json(ReviewDeletedResponseResource {
        message: "Review deleted successfully".to_string(),
    }))
}

fn bearer_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn client_address(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

fn rate_limited(
    retry_after_seconds: u64,
) -> (StatusCode, HeaderMap, Json<ReviewsErrorResponseResource>) {
    let mut headers = HeaderMap::new();
    if let Ok(value) = retry_after_seconds.to_string().parse() {
        headers.insert(RETRY_AFTER, value);
    }

    (
        StatusCode::TOO_MANY_REQUESTS,
        headers,
        Json(ReviewsErrorResponseResource {
            message: "Too many requests, please try again later.".to_string(),
        }),
    )
}

fn without_headers(
    reply: (StatusCode, Json<ReviewsErrorResponseResource>),
) -> (StatusCode, HeaderMap, Json<ReviewsErrorResponseResource>) {
    (reply.0, HeaderMap::new(), reply.1)
}

fn map_guard_error(
    error: AuthDomainError,
) -> (StatusCode, HeaderMap, Json<ReviewsErrorResponseResource>) {
    let reply = match error {
        AuthDomainError::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            Json(ReviewsErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthDomainError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ReviewsErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthDomainError::UpstreamFailure(details) => {
            tracing::error!(%details, "review guard failed upstream");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReviewsErrorResponseResource {
                    message: "verification failed".to_string(),
                }),
            )
        }
    };

    without_headers(reply)
}

fn map_domain_error(
    error: ReviewsDomainError,
) -> (StatusCode, Json<ReviewsErrorResponseResource>) {
    match error {
        ReviewsDomainError::ReviewNotFound => (
            StatusCode::NOT_FOUND,
            Json(ReviewsErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        ReviewsDomainError::InfrastructureError(details) => {
            tracing::error!(%details, "reviews infrastructure error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReviewsErrorResponseResource {
                    message: "infrastructure error".to_string(),
                }),
            )
        }
    }
}
