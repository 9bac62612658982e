use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PromotedUserResource {
    pub id: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PromoteUserResponseResource {
    pub message: String,
    pub user: PromotedUserResource,
}
