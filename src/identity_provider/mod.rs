use std::{sync::Arc, time::Duration};

use crate::{
    config::app_config::AppConfig,
    identity_provider::{
        application::acl::{
            decode_only_identity_verification_facade_impl::DecodeOnlyIdentityVerificationFacadeImpl,
            grpc_identity_verification_facade_impl::GrpcIdentityVerificationFacadeImpl,
        },
        interfaces::acl::identity_verification_facade::IdentityVerificationFacade,
    },
};

pub mod application;
pub mod interfaces;

pub fn select_identity_verification_facade(
    config: &AppConfig,
) -> Result<Arc<dyn IdentityVerificationFacade>, String> {
    match &config.identity_verifier_endpoint {
        Some(endpoint) => {
            tracing::info!(endpoint = %endpoint, "strict id token verification enabled");
            Ok(Arc::new(GrpcIdentityVerificationFacadeImpl::new(
                endpoint.clone(),
                Duration::from_secs(5),
                Duration::from_secs(60),
                5,
                Duration::from_secs(30),
            )))
        }
        None => {
            if config.is_production() {
                return Err(
                    "IDENTITY_VERIFIER_ENDPOINT is required in production: refusing to start with decode-only token verification"
                        .to_string(),
                );
            }
            tracing::warn!(
                "IDENTITY_VERIFIER_ENDPOINT is not set: id tokens will be decoded WITHOUT signature verification"
            );
            Ok(Arc::new(DecodeOnlyIdentityVerificationFacadeImpl::new()))
        }
    }
}
