use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UploadAuthorizationResponseResource {
    pub token: String,
    pub expire: i64,
    pub signature: String,
}
