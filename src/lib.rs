pub mod auth;
pub mod config;
pub mod identity_provider;
pub mod media;
pub mod reviews;
pub mod session_bridge;
pub mod shared;
pub mod users;
pub mod identity_grpc {
    tonic::include_proto!("identity_token_verification");
}
