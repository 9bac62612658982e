use chrono::Utc;
use hotel_marketplace_api::{
    auth::domain::model::enums::user_role::UserRole,
    users::domain::model::entities::user_record::UserRecord,
};
use uuid::Uuid;

// subject ids de prueba consistentes
pub const PARTNER_SUBJECT_ID: &str = "partner-subject-001";

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn user_record_with_role(external_id: &str, email: &str, role: UserRole) -> UserRecord {
    UserRecord {
        id: Uuid::now_v7(),
        external_id: Some(external_id.to_string()),
        email: email.to_string(),
        display_name: "Test User".to_string(),
        photo_url: None,
        role,
        status: "active".parse().expect("valid status"),
        bookings_count: 0,
        properties_count: 0,
        total_spent: 0.0,
        total_revenue: 0.0,
        last_login: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
