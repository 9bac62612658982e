use hotel_marketplace_api::session_bridge::domain::model::entities::{
    local_user_profile::LocalUserProfile, provider_session::ProviderSession,
};

pub fn provider_session(subject_id: &str, email: Option<&str>, id_token: &str) -> ProviderSession {
    ProviderSession {
        subject_id: subject_id.to_string(),
        email: email.map(str::to_string),
        display_name: Some("Test User".to_string()),
        photo_url: None,
        id_token: id_token.to_string(),
    }
}

pub fn local_profile(id: &str, external_id: Option<&str>, email: &str) -> LocalUserProfile {
    LocalUserProfile {
        id: id.to_string(),
        external_id: external_id.map(str::to_string),
        email: email.to_string(),
        display_name: "Test User".to_string(),
        photo_url: None,
        role: "guest".parse().expect("valid role"),
        status: "active".parse().expect("valid status"),
        bookings_count: 0,
        properties_count: 0,
        total_spent: 0.0,
        total_revenue: 0.0,
        last_login: None,
        created_at: "2026-01-01T00:00:00Z".to_string(),
        updated_at: "2026-01-01T00:00:00Z".to_string(),
    }
}
