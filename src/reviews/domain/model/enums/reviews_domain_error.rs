use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewsDomainError {
    #[error("review not found")]
    ReviewNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
