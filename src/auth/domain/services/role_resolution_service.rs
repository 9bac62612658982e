use async_trait::async_trait;

use crate::auth::domain::model::{
    enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
    value_objects::subject_id::SubjectId,
};

#[async_trait]
pub trait RoleResolutionService: Send + Sync {
    async fn handle_resolve_role(
        &self,
        subject_id: &SubjectId,
    ) -> Result<UserRole, AuthDomainError>;
}
