use async_trait::async_trait;
use uuid::Uuid;

use crate::users::domain::model::{
    entities::user_record::UserRecord, enums::users_domain_error::UsersDomainError,
};

#[derive(Clone, Debug)]
pub struct NewUserRecord {
    pub external_id: Option<String>,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

#[async_trait]
pub trait UserRecordRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UsersDomainError>;

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UsersDomainError>;

    async fn create_or_fetch(&self, draft: NewUserRecord)
    -> Result<UserRecord, UsersDomainError>;

    async fn backfill_external_id(
        &self,
        id: Uuid,
        external_id: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError>;

    async fn promote_to_admin(&self, id: Uuid) -> Result<Option<UserRecord>, UsersDomainError>;
}
