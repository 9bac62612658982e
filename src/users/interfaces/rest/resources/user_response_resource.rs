use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::users::domain::model::entities::user_record::UserRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserResponseResource {
    pub id: String,
    pub external_id: Option<String>,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub role: String,
    pub status: String,
    pub bookings_count: i64,
    pub properties_count: i64,
    pub total_spent: f64,
    pub total_revenue: f64,
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserResponseResource {
    pub fn from_record(record: UserRecord) -> Self {
        Self {
            id: record.id.to_string(),
            external_id: record.external_id,
            email: record.email,
            display_name: record.display_name,
            photo_url: record.photo_url,
            role: record.role.as_str().to_string(),
            status: record.status.as_str().to_string(),
            bookings_count: record.bookings_count,
            properties_count: record.properties_count,
            total_spent: record.total_spent,
            total_revenue: record.total_revenue,
            last_login: record.last_login.map(|stamp| stamp.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}
