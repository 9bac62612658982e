use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth::build_access_guard,
    config::app_config::AppConfig,
    identity_provider::interfaces::acl::identity_verification_facade::IdentityVerificationFacade,
    media::{
        application::acl::http_media_storage_facade_impl::HttpMediaStorageFacadeImpl,
        interfaces::rest::controllers::media_rest_controller::{MediaRestControllerState, router},
    },
    shared::rate_limiting::fixed_window_rate_limiter::FixedWindowRateLimiter,
};

pub mod application;
pub mod interfaces;

pub async fn build_media_router(
    config: &AppConfig,
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
    rate_limiter: Arc<FixedWindowRateLimiter>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let media_storage_facade = Arc::new(HttpMediaStorageFacadeImpl::new(
        config.media_storage_endpoint.clone(),
        config.media_storage_private_key.clone(),
    ));
    let access_guard_service = build_access_guard(pool, identity_verification_facade);

    Ok(router(MediaRestControllerState {
        media_storage_facade,
        access_guard_service,
        rate_limiter,
        upload_folder: config.media_storage_folder.clone(),
    }))
}
