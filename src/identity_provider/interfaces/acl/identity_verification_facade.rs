use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct IdentityTokenClaims {
    pub uid: Option<String>,
    pub sub: Option<String>,
    pub email: Option<String>,
}

impl IdentityTokenClaims {
    pub fn subject_identifier(&self) -> Option<&str> {
        self.uid
            .as_deref()
            .or(self.sub.as_deref())
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("invalid id token: {0}")]
    InvalidToken(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityVerificationFacade: Send + Sync {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<IdentityTokenClaims, IdentityProviderError>;
}
