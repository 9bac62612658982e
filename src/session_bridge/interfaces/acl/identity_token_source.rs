use async_trait::async_trait;

#[async_trait]
pub trait IdentityTokenSource: Send + Sync {
    async fn fresh_token(&self) -> Option<String>;
}
