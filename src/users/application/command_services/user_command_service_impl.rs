use std::sync::Arc;

use async_trait::async_trait;

use crate::users::{
    domain::{
        model::{
            commands::{
                promote_user_command::PromoteUserCommand,
                reconcile_subject_command::ReconcileSubjectCommand,
                register_user_command::RegisterUserCommand,
            },
            entities::user_record::UserRecord,
            enums::users_domain_error::UsersDomainError,
        },
        services::user_command_service::UserCommandService,
    },
    infrastructure::persistence::repositories::user_record_repository::{
        NewUserRecord, UserRecordRepository,
    },
};

pub struct UserCommandServiceImpl {
    user_record_repository: Arc<dyn UserRecordRepository>,
}

impl UserCommandServiceImpl {
    pub fn new(user_record_repository: Arc<dyn UserRecordRepository>) -> Self {
        Self {
            user_record_repository,
        }
    }
}

#[async_trait]
impl UserCommandService for UserCommandServiceImpl {
    async fn handle_register_user(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserRecord, UsersDomainError> {
        let record = self
            .user_record_repository
            .create_or_fetch(NewUserRecord {
                external_id: command.external_id().map(str::to_string),
                email: command.email().value().to_string(),
                display_name: command.display_name().to_string(),
                photo_url: command.photo_url().map(str::to_string),
            })
            .await?;

        tracing::debug!(user_id = %record.id, "user record registered");

        Ok(record)
    }

    async fn handle_reconcile_subject(
        &self,
        command: ReconcileSubjectCommand,
    ) -> Result<UserRecord, UsersDomainError> {
        let record = self
            .user_record_repository
            .find_by_id(command.user_id())
            .await?
            .ok_or(UsersDomainError::UserNotFound)?;

        if record.external_id.as_deref() == Some(command.external_id()) {
            return Ok(record);
        }

        self.user_record_repository
            .backfill_external_id(command.user_id(), command.external_id())
            .await?
            .ok_or(UsersDomainError::UserNotFound)
    }

    async fn handle_promote_user(
        &self,
        command: PromoteUserCommand,
    ) -> Result<UserRecord, UsersDomainError> {
        let record = self
            .user_record_repository
            .promote_to_admin(command.user_id())
            .await?
            .ok_or(UsersDomainError::UserNotFound)?;

        tracing::info!(user_id = %record.id, "user promoted to admin");

        Ok(record)
    }
}
