use async_trait::async_trait;

use crate::users::domain::model::{
    commands::{
        promote_user_command::PromoteUserCommand, reconcile_subject_command::ReconcileSubjectCommand,
        register_user_command::RegisterUserCommand,
    },
    entities::user_record::UserRecord,
    enums::users_domain_error::UsersDomainError,
};

#[async_trait]
pub trait UserCommandService: Send + Sync {
    async fn handle_register_user(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserRecord, UsersDomainError>;

    async fn handle_reconcile_subject(
        &self,
        command: ReconcileSubjectCommand,
    ) -> Result<UserRecord, UsersDomainError>;

    async fn handle_promote_user(
        &self,
        command: PromoteUserCommand,
    ) -> Result<UserRecord, UsersDomainError>;
}
