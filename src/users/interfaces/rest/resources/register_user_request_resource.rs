use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterUserRequestResource {
    pub external_id: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub photo_url: Option<String>,
}
