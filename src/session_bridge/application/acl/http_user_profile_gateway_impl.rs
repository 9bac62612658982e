use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::json;

use crate::session_bridge::{
    application::api_http_client::ApiHttpClient,
    domain::model::entities::local_user_profile::LocalUserProfile,
    interfaces::acl::user_profile_gateway::{
        NewUserProfileDraft, UserProfileGateway, UserProfileGatewayError,
    },
};

pub struct HttpUserProfileGatewayImpl {
    api_client: Arc<ApiHttpClient>,
}

impl HttpUserProfileGatewayImpl {
    pub fn new(api_client: Arc<ApiHttpClient>) -> Self {
        Self { api_client }
    }

    async fn find_by(
        &self,
        parameter: &str,
        value: &str,
    ) -> Result<Option<LocalUserProfile>, UserProfileGatewayError> {
        let response = self
            .api_client
            .request(Method::GET, "/api/users")
            .await
            .query(&[(parameter, value)])
            .send()
            .await
            .map_err(|e| UserProfileGatewayError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let profile = response
                    .json::<LocalUserProfile>()
                    .await
                    .map_err(|e| UserProfileGatewayError::Unavailable(e.to_string()))?;
                Ok(Some(profile))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(UserProfileGatewayError::Rejected(format!(
                "lookup failed with status {status}"
            ))),
        }
    }
}

#[async_trait]
impl UserProfileGateway for HttpUserProfileGatewayImpl {
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<LocalUserProfile>, UserProfileGatewayError> {
        self.find_by("external_id", external_id).await
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<LocalUserProfile>, UserProfileGatewayError> {
        self.find_by("email", email).await
    }

    async fn register_profile(
        &self,
        draft: NewUserProfileDraft,
    ) -> Result<LocalUserProfile, UserProfileGatewayError> {
        let response = self
            .api_client
            .request(Method::POST, "/api/users")
            .await
            .json(&draft)
            .send()
            .await
            .map_err(|e| UserProfileGatewayError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UserProfileGatewayError::Rejected(format!(
                "registration failed with status {}",
                response.status()
            )));
        }

        response
            .json::<LocalUserProfile>()
            .await
            .map_err(|e| UserProfileGatewayError::Unavailable(e.to_string()))
    }

    async fn backfill_external_id(
        &self,
        profile_id: &str,
        external_id: &str,
    ) -> Result<LocalUserProfile, UserProfileGatewayError> {
        let response = self
            .api_client
            .request(Method::PATCH, &format!("/api/users/{profile_id}"))
            .await
            .json(&json!({ "external_id": external_id }))
            .send()
            .await
            .map_err(|e| UserProfileGatewayError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UserProfileGatewayError::Rejected(format!(
                "reconciliation failed with status {}",
                response.status()
            )));
        }

        response
            .json::<LocalUserProfile>()
            .await
            .map_err(|e| UserProfileGatewayError::Unavailable(e.to_string()))
    }
}
