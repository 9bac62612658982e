use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ReconcileUserRequestResource {
    #[validate(length(min = 1))]
    pub external_id: String,
}
