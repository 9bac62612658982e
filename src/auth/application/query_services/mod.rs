pub mod access_guard_service_impl;
pub mod role_resolution_service_impl;
pub mod token_verification_service_impl;
