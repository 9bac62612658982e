use std::sync::Arc;

use async_trait::async_trait;

use crate::users::{
    domain::{
        model::{
            entities::user_record::UserRecord, enums::users_domain_error::UsersDomainError,
            queries::find_user_query::FindUserQuery,
        },
        services::user_query_service::UserQueryService,
    },
    infrastructure::persistence::repositories::user_record_repository::UserRecordRepository,
};

pub struct UserQueryServiceImpl {
    user_record_repository: Arc<dyn UserRecordRepository>,
}

impl UserQueryServiceImpl {
    pub fn new(user_record_repository: Arc<dyn UserRecordRepository>) -> Self {
        Self {
            user_record_repository,
        }
    }
}

#[async_trait]
impl UserQueryService for UserQueryServiceImpl {
    async fn handle_find_user(
        &self,
        query: FindUserQuery,
    ) -> Result<Option<UserRecord>, UsersDomainError> {
        if let Some(external_id) = query.external_id() {
            if let Some(record) = self
                .user_record_repository
                .find_by_external_id(external_id)
                .await?
            {
                return Ok(Some(record));
            }
        }

        if let Some(email) = query.email() {
            return self.user_record_repository.find_by_email(email).await;
        }

        Ok(None)
    }
}
