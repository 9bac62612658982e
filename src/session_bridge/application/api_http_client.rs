use std::sync::{Arc, OnceLock};

use reqwest::header::AUTHORIZATION;

use crate::session_bridge::{
    application::ambient_credential_store::AmbientCredentialStore,
    interfaces::acl::identity_token_source::IdentityTokenSource,
};

const LOCAL_API_NAMESPACE: &str = "/api/";

pub struct RequestInterception {
    pub ambient_credentials: Arc<AmbientCredentialStore>,
    pub token_source: Arc<dyn IdentityTokenSource>,
}

pub struct ApiHttpClient {
    http: reqwest::Client,
    base_url: String,
    interception: OnceLock<RequestInterception>,
}

impl ApiHttpClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            interception: OnceLock::new(),
        }
    }

    pub fn install_interception(&self, interception: RequestInterception) -> bool {
        self.interception.set(interception).is_ok()
    }

    pub fn interception_installed(&self) -> bool {
        self.interception.get().is_some()
    }

    pub async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        if path.starts_with(LOCAL_API_NAMESPACE) {
            if let Some(interception) = self.interception.get() {
                let token = match interception.ambient_credentials.current() {
                    Some(token) => Some(token),
                    None => interception.token_source.fresh_token().await,
                };

                if let Some(token) = token {
                    builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
                }
            }
        }

        builder
    }
}
