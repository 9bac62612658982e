use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::media::interfaces::acl::media_storage_facade::{
    MediaStorageError, MediaStorageFacade, MediaUploadAuthorization, UploadedMedia,
};

const UPLOAD_AUTHORIZATION_TTL_SECONDS: i64 = 1800;

#[derive(Debug, Deserialize)]
struct UploadResponseBody {
    url: String,
    #[serde(rename = "fileId")]
    file_id: String,
}

pub struct HttpMediaStorageFacadeImpl {
    http: reqwest::Client,
    endpoint: String,
    private_key: String,
}

impl HttpMediaStorageFacadeImpl {
    pub fn new(endpoint: String, private_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            private_key,
        }
    }
}

#[async_trait]
impl MediaStorageFacade for HttpMediaStorageFacadeImpl {
    async fn upload_media(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedMedia, MediaStorageError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string())
            .text("folder", folder.to_string());

        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaStorageError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaStorageError::Unavailable(format!(
                "upload rejected with status {}",
                response.status()
            )));
        }

        let body = response
            .json::<UploadResponseBody>()
            .await
            .map_err(|e| MediaStorageError::Unavailable(e.to_string()))?;

        Ok(UploadedMedia {
            url: body.url,
            file_id: body.file_id,
        })
    }

    fn authentication_parameters(&self) -> MediaUploadAuthorization {
        let token = Uuid::now_v7().to_string();
        let expire = Utc::now().timestamp() + UPLOAD_AUTHORIZATION_TTL_SECONDS;

        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hasher.update(expire.to_string().as_bytes());
        hasher.update(self.private_key.as_bytes());
        let signature = format!("{:x}", hasher.finalize());

        MediaUploadAuthorization {
            token,
            expire,
            signature,
        }
    }
}
