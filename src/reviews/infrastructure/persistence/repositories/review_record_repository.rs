use async_trait::async_trait;
use uuid::Uuid;

use crate::reviews::domain::model::{
    entities::review_record::ReviewRecord, enums::reviews_domain_error::ReviewsDomainError,
};

#[derive(Clone, Debug)]
pub struct ReviewUpdateCriteria {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[async_trait]
pub trait ReviewRecordRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ReviewRecord>, ReviewsDomainError>;

    async fn update(
        &self,
        id: Uuid,
        criteria: ReviewUpdateCriteria,
    ) -> Result<Option<ReviewRecord>, ReviewsDomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, ReviewsDomainError>;
}
