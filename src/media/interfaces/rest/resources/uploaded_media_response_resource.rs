use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UploadedMediaResponseResource {
    pub url: String,
    pub file_id: String,
}
