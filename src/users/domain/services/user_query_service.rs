use async_trait::async_trait;

use crate::users::domain::model::{
    entities::user_record::UserRecord, enums::users_domain_error::UsersDomainError,
    queries::find_user_query::FindUserQuery,
};

#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn handle_find_user(
        &self,
        query: FindUserQuery,
    ) -> Result<Option<UserRecord>, UsersDomainError>;
}
