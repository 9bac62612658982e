use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::identity_provider::interfaces::acl::identity_verification_facade::{
    IdentityProviderError, IdentityTokenClaims, IdentityVerificationFacade,
};

#[derive(Debug, Deserialize)]
struct RawIdentityClaims {
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

pub struct DecodeOnlyIdentityVerificationFacadeImpl;

impl DecodeOnlyIdentityVerificationFacadeImpl {
    pub fn new() -> Self {
        Self
    }

    fn decode_only_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl Default for DecodeOnlyIdentityVerificationFacadeImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityVerificationFacade for DecodeOnlyIdentityVerificationFacadeImpl {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<IdentityTokenClaims, IdentityProviderError> {
        if id_token.trim().is_empty() {
            return Err(IdentityProviderError::InvalidToken(
                "id token is empty".to_string(),
            ));
        }

        let decoded = decode::<RawIdentityClaims>(
            id_token,
            &DecodingKey::from_secret(&[]),
            &Self::decode_only_validation(),
        )
        .map_err(|e| IdentityProviderError::InvalidToken(e.to_string()))?;

        tracing::debug!(
            sub = decoded.claims.sub.as_deref().unwrap_or(""),
            "decoded id token without signature verification"
        );

        Ok(IdentityTokenClaims {
            uid: decoded.claims.uid,
            sub: decoded.claims.sub,
            email: decoded.claims.email,
        })
    }
}
