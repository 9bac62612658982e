pub mod admin_verification_response_resource;
pub mod auth_error_response_resource;
