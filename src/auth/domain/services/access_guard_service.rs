use async_trait::async_trait;

use crate::auth::domain::model::{
    entities::authenticated_principal::AuthenticatedPrincipal,
    enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
};

#[async_trait]
pub trait AccessGuardService: Send + Sync {
    async fn handle_require_authenticated(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<AuthenticatedPrincipal, AuthDomainError>;

    async fn handle_require_role(
        &self,
        authorization_header: Option<&str>,
        required_role: UserRole,
    ) -> Result<AuthenticatedPrincipal, AuthDomainError>;
}
