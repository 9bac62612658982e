use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    auth::domain::{
        model::{
            entities::authenticated_principal::AuthenticatedPrincipal,
            enums::auth_domain_error::AuthDomainError, value_objects::subject_id::SubjectId,
        },
        services::{
            role_resolution_service::RoleResolutionService,
            token_verification_service::TokenVerificationService,
        },
    },
    identity_provider::interfaces::acl::identity_verification_facade::{
        IdentityProviderError, IdentityVerificationFacade,
    },
};

pub struct TokenVerificationServiceImpl {
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
    role_resolution_service: Arc<dyn RoleResolutionService>,
}

impl TokenVerificationServiceImpl {
    pub fn new(
        identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
        role_resolution_service: Arc<dyn RoleResolutionService>,
    ) -> Self {
        Self {
            identity_verification_facade,
            role_resolution_service,
        }
    }
}

#[async_trait]
impl TokenVerificationService for TokenVerificationServiceImpl {
    async fn handle_verify_bearer(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<Option<AuthenticatedPrincipal>, AuthDomainError> {
        let Some(raw_header) = authorization_header else {
            return Ok(None);
        };

        let Some(raw_token) = raw_header.strip_prefix("Bearer ") else {
            tracing::debug!("authorization header is not a bearer credential");
            return Ok(None);
        };

        let token = raw_token.trim();
        if token.is_empty() {
            return Ok(None);
        }

        let claims = match self.identity_verification_facade.verify_id_token(token).await {
            Ok(claims) => claims,
            Err(IdentityProviderError::InvalidToken(reason)) => {
                tracing::debug!(%reason, "id token rejected");
                return Ok(None);
            }
            Err(IdentityProviderError::Unavailable(reason)) => {
                return Err(AuthDomainError::UpstreamFailure(reason));
            }
        };

        let Some(subject) = claims.subject_identifier() else {
            tracing::debug!("id token carries neither uid nor sub");
            return Ok(None);
        };

        let subject_id = SubjectId::new(subject.to_string())?;
        let role = self
            .role_resolution_service
            .handle_resolve_role(&subject_id)
            .await?;

        Ok(Some(AuthenticatedPrincipal {
            subject_id,
            email: claims.email,
            role,
        }))
    }
}
