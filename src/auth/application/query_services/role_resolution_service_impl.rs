use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    auth::domain::{
        model::{
            enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
            value_objects::subject_id::SubjectId,
        },
        services::role_resolution_service::RoleResolutionService,
    },
    users::infrastructure::persistence::repositories::user_record_repository::UserRecordRepository,
};

pub struct RoleResolutionServiceImpl {
    user_record_repository: Arc<dyn UserRecordRepository>,
}

impl RoleResolutionServiceImpl {
    pub fn new(user_record_repository: Arc<dyn UserRecordRepository>) -> Self {
        Self {
            user_record_repository,
        }
    }
}

#[async_trait]
impl RoleResolutionService for RoleResolutionServiceImpl {
    async fn handle_resolve_role(
        &self,
        subject_id: &SubjectId,
    ) -> Result<UserRole, AuthDomainError> {
        let record = self
            .user_record_repository
            .find_by_external_id(subject_id.value())
            .await
            .map_err(|e| AuthDomainError::UpstreamFailure(e.to_string()))?;

        Ok(record.map(|r| r.role).unwrap_or(UserRole::Guest))
    }
}
