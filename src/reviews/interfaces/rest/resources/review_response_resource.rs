use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::reviews::domain::model::entities::review_record::ReviewRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReviewResource {
    pub id: String,
    pub hotel_id: String,
    pub author_external_id: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ReviewResource {
    pub fn from_record(record: ReviewRecord) -> Self {
        Self {
            id: record.id.to_string(),
            hotel_id: record.hotel_id.to_string(),
            author_external_id: record.author_external_id,
            rating: record.rating,
            comment: record.comment,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReviewResponseResource {
    pub review: ReviewResource,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReviewDeletedResponseResource {
    pub message: String,
}
