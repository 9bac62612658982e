use async_trait::async_trait;

use crate::auth::domain::model::{
    entities::authenticated_principal::AuthenticatedPrincipal,
    enums::auth_domain_error::AuthDomainError,
};

#[async_trait]
pub trait TokenVerificationService: Send + Sync {
    async fn handle_verify_bearer(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<Option<AuthenticatedPrincipal>, AuthDomainError>;
}
