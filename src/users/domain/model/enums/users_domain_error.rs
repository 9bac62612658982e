use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersDomainError {
    #[error("email is invalid")]
    InvalidEmail,

    #[error("external subject id is invalid")]
    InvalidExternalId,

    #[error("lookup requires external_id or email")]
    MissingLookupCriteria,

    #[error("user not found")]
    UserNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
