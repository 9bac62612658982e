use serde::Deserialize;

use crate::auth::domain::model::enums::{user_role::UserRole, user_status::UserStatus};

#[derive(Clone, Debug, Deserialize)]
pub struct LocalUserProfile {
    pub id: String,
    pub external_id: Option<String>,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub bookings_count: i64,
    pub properties_count: i64,
    pub total_spent: f64,
    pub total_revenue: f64,
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
