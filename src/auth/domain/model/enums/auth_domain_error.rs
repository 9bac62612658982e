use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthDomainError {
    #[error("unauthorized")]
    Unauthenticated,

    #[error("forbidden")]
    Forbidden,

    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}
