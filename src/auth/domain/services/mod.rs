pub mod access_guard_service;
pub mod role_resolution_service;
pub mod token_verification_service;
