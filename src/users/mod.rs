use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth::build_access_guard,
    config::app_config::AppConfig,
    identity_provider::interfaces::acl::identity_verification_facade::IdentityVerificationFacade,
    shared::rate_limiting::fixed_window_rate_limiter::FixedWindowRateLimiter,
    users::{
        application::{
            command_services::user_command_service_impl::UserCommandServiceImpl,
            query_services::user_query_service_impl::UserQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_user_record_repository_impl::SqlxUserRecordRepositoryImpl,
        interfaces::rest::controllers::users_rest_controller::{UsersRestControllerState, router},
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_users_router(
    config: &AppConfig,
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
    rate_limiter: Arc<FixedWindowRateLimiter>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let user_record_repository = Arc::new(SqlxUserRecordRepositoryImpl::new(pool.clone()));
    let command_service = Arc::new(UserCommandServiceImpl::new(user_record_repository.clone()));
    let query_service = Arc::new(UserQueryServiceImpl::new(user_record_repository));
    let access_guard_service = build_access_guard(pool, identity_verification_facade);

    Ok(router(UsersRestControllerState {
        command_service,
        query_service,
        access_guard_service,
        rate_limiter,
    }))
}
