use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth::build_access_guard,
    config::app_config::AppConfig,
    identity_provider::interfaces::acl::identity_verification_facade::IdentityVerificationFacade,
    reviews::{
        infrastructure::persistence::repositories::postgres::sqlx_review_record_repository_impl::SqlxReviewRecordRepositoryImpl,
        interfaces::rest::controllers::reviews_rest_controller::{
            ReviewsRestControllerState, router,
        },
    },
    shared::rate_limiting::fixed_window_rate_limiter::FixedWindowRateLimiter,
};

pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_reviews_router(
    config: &AppConfig,
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
    rate_limiter: Arc<FixedWindowRateLimiter>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let repository = Arc::new(SqlxReviewRecordRepositoryImpl::new(pool.clone()));
    let access_guard_service = build_access_guard(pool, identity_verification_facade);

    Ok(router(ReviewsRestControllerState {
        repository,
        access_guard_service,
        rate_limiter,
    }))
}
