use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::domain::{
    model::{
        entities::authenticated_principal::AuthenticatedPrincipal,
        enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
    },
    services::{
        access_guard_service::AccessGuardService,
        token_verification_service::TokenVerificationService,
    },
};

pub struct AccessGuardServiceImpl {
    token_verification_service: Arc<dyn TokenVerificationService>,
}

impl AccessGuardServiceImpl {
    pub fn new(token_verification_service: Arc<dyn TokenVerificationService>) -> Self {
        Self {
            token_verification_service,
        }
    }
}

#[async_trait]
impl AccessGuardService for AccessGuardServiceImpl {
    async fn handle_require_authenticated(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<AuthenticatedPrincipal, AuthDomainError> {
        self.token_verification_service
            .handle_verify_bearer(authorization_header)
            .await?
            .ok_or(AuthDomainError::Unauthenticated)
    }

    async fn handle_require_role(
        &self,
        authorization_header: Option<&str>,
        required_role: UserRole,
    ) -> Result<AuthenticatedPrincipal, AuthDomainError> {
        let principal = self
            .handle_require_authenticated(authorization_header)
            .await?;

        if !principal.role.satisfies(required_role) {
            return Err(AuthDomainError::Forbidden);
        }

        Ok(principal)
    }
}
