use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth::{
        application::query_services::{
            access_guard_service_impl::AccessGuardServiceImpl,
            role_resolution_service_impl::RoleResolutionServiceImpl,
            token_verification_service_impl::TokenVerificationServiceImpl,
        },
        domain::services::access_guard_service::AccessGuardService,
        interfaces::rest::controllers::auth_rest_controller::{AuthRestControllerState, router},
    },
    config::app_config::AppConfig,
    identity_provider::interfaces::acl::identity_verification_facade::IdentityVerificationFacade,
    users::infrastructure::persistence::repositories::postgres::sqlx_user_record_repository_impl::SqlxUserRecordRepositoryImpl,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_access_guard(
    pool: PgPool,
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
) -> Arc<dyn AccessGuardService> {
    let user_record_repository = Arc::new(SqlxUserRecordRepositoryImpl::new(pool));
    let role_resolution_service = Arc::new(RoleResolutionServiceImpl::new(user_record_repository));
    let token_verification_service = Arc::new(TokenVerificationServiceImpl::new(
        identity_verification_facade,
        role_resolution_service,
    ));

    Arc::new(AccessGuardServiceImpl::new(token_verification_service))
}

pub async fn build_auth_router(
    config: &AppConfig,
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let access_guard_service = build_access_guard(pool, identity_verification_facade);

    Ok(router(AuthRestControllerState {
        access_guard_service,
    }))
}
