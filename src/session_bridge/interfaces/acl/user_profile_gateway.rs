use async_trait::async_trait;
use serde::Serialize;

use crate::session_bridge::domain::model::entities::local_user_profile::LocalUserProfile;

#[derive(Clone, Debug, Serialize)]
pub struct NewUserProfileDraft {
    pub external_id: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UserProfileGatewayError {
    #[error("profile gateway unavailable: {0}")]
    Unavailable(String),

    #[error("profile gateway rejected request: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait UserProfileGateway: Send + Sync {
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<LocalUserProfile>, UserProfileGatewayError>;

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<LocalUserProfile>, UserProfileGatewayError>;

    async fn register_profile(
        &self,
        draft: NewUserProfileDraft,
    ) -> Result<LocalUserProfile, UserProfileGatewayError>;

    async fn backfill_external_id(
        &self,
        profile_id: &str,
        external_id: &str,
    ) -> Result<LocalUserProfile, UserProfileGatewayError>;
}
