use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::sync::{Mutex, RwLock};
use tonic::transport::{Channel, Endpoint};

use crate::{
    identity_grpc::{
        VerifyIdTokenRequest,
        identity_token_verification_service_client::IdentityTokenVerificationServiceClient,
    },
    identity_provider::interfaces::acl::identity_verification_facade::{
        IdentityProviderError, IdentityTokenClaims, IdentityVerificationFacade,
    },
};

#[derive(Clone)]
struct CachedVerification {
    claims: IdentityTokenClaims,
    expires_at: Instant,
}

#[derive(Default)]
struct CircuitState {
    consecutive_failures: u32,
    opened_until: Option<Instant>,
}

pub struct GrpcIdentityVerificationFacadeImpl {
    endpoint: String,
    timeout: Duration,
    cache_ttl: Duration,
    failure_threshold: u32,
    open_duration: Duration,
    cache: Arc<RwLock<HashMap<String, CachedVerification>>>,
    circuit: Arc<Mutex<CircuitState>>,
}

impl GrpcIdentityVerificationFacadeImpl {
    pub fn new(
        endpoint: String,
        timeout: Duration,
        cache_ttl: Duration,
        failure_threshold: u32,
        open_duration: Duration,
    ) -> Self {
        Self {
            endpoint,
            timeout,
            cache_ttl,
            failure_threshold,
            open_duration,
            cache: Arc::new(RwLock::new(HashMap::new())),
            circuit: Arc::new(Mutex::new(CircuitState::default())),
        }
    }

    fn token_hash(id_token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(id_token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn get_cached(&self, token_hash: &str) -> Option<IdentityTokenClaims> {
        let guard = self.cache.read().await;
        guard.get(token_hash).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.claims.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(&self, token_hash: String, claims: IdentityTokenClaims) {
        let mut guard = self.cache.write().await;
        guard.insert(
            token_hash,
            CachedVerification {
                claims,
                expires_at: Instant::now() + self.cache_ttl,
            },
        );
    }

    async fn can_attempt_call(&self) -> bool {
        let mut guard = self.circuit.lock().await;
        match guard.opened_until {
            Some(until) if until > Instant::now() => false,
            Some(_) => {
                guard.opened_until = None;
                true
            }
            None => true,
        }
    }

    async fn register_success(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = 0;
        guard.opened_until = None;
    }

    async fn register_failure(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = guard.consecutive_failures.saturating_add(1);

        if guard.consecutive_failures >= self.failure_threshold {
            guard.opened_until = Some(Instant::now() + self.open_duration);
            guard.consecutive_failures = 0;
        }
    }

    async fn grpc_client(
        &self,
    ) -> Result<IdentityTokenVerificationServiceClient<Channel>, IdentityProviderError> {
        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?
            .connect_timeout(self.timeout)
            .timeout(self.timeout);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        Ok(IdentityTokenVerificationServiceClient::new(channel))
    }
}

#[async_trait]
impl IdentityVerificationFacade for GrpcIdentityVerificationFacadeImpl {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<IdentityTokenClaims, IdentityProviderError> {
        if id_token.trim().is_empty() {
            return Err(IdentityProviderError::InvalidToken(
                "id token is empty".to_string(),
            ));
        }

        if !self.can_attempt_call().await {
            return Err(IdentityProviderError::Unavailable(
                "circuit breaker is open".to_string(),
            ));
        }

        let token_hash = Self::token_hash(id_token);

        if let Some(cached) = self.get_cached(&token_hash).await {
            return Ok(cached);
        }

        let mut client = self.grpc_client().await?;

        let response = client
            .verify_id_token(VerifyIdTokenRequest {
                id_token: id_token.to_string(),
            })
            .await;

        let response = match response {
            Ok(value) => {
                self.register_success().await;
                value.into_inner()
            }
            Err(error) => {
                self.register_failure().await;
                return Err(IdentityProviderError::Unavailable(error.to_string()));
            }
        };

        if !response.is_valid {
            return Err(IdentityProviderError::InvalidToken(
                response.error_message.clone(),
            ));
        }

        if response.subject_id.trim().is_empty() {
            return Err(IdentityProviderError::InvalidToken(
                "verified token carries no subject".to_string(),
            ));
        }

        let claims = IdentityTokenClaims {
            uid: Some(response.subject_id),
            sub: None,
            email: if response.email.is_empty() {
                None
            } else {
                Some(response.email)
            },
        };

        self.set_cache(token_hash, claims.clone()).await;

        Ok(claims)
    }
}
