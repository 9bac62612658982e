use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct UploadedMedia {
    pub url: String,
    pub file_id: String,
}

#[derive(Clone, Debug)]
pub struct MediaUploadAuthorization {
    pub token: String,
    pub expire: i64,
    pub signature: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStorageError {
    #[error("media storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait MediaStorageFacade: Send + Sync {
    async fn upload_media(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedMedia, MediaStorageError>;

    fn authentication_parameters(&self) -> MediaUploadAuthorization;
}
