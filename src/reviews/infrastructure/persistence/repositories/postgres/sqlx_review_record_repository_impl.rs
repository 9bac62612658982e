use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::reviews::{
    domain::model::{
        entities::review_record::ReviewRecord, enums::reviews_domain_error::ReviewsDomainError,
    },
    infrastructure::persistence::repositories::review_record_repository::{
        ReviewRecordRepository, ReviewUpdateCriteria,
    },
};

const REVIEW_COLUMNS: &str =
    "id, hotel_id, author_external_id, rating, comment, created_at, updated_at";

type ReviewRow = (
    Uuid,
    Uuid,
    Option<String>,
    i32,
    String,
    DateTime<Utc>,
    DateTime<Utc>,
);

fn into_record(row: ReviewRow) -> ReviewRecord {
    let (id, hotel_id, author_external_id, rating, comment, created_at, updated_at) = row;
    ReviewRecord {
        id,
        hotel_id,
        author_external_id,
        rating,
        comment,
        created_at,
        updated_at,
    }
}

pub struct SqlxReviewRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxReviewRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRecordRepository for SqlxReviewRecordRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ReviewRecord>, ReviewsDomainError> {
        let statement = format!("SELECT {REVIEW_COLUMNS} FROM hotel_reviews WHERE id = $1");

        let row = sqlx::query_as::<_, ReviewRow>(&statement)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(into_record))
    }

    async fn update(
        &self,
        id: Uuid,
        criteria: ReviewUpdateCriteria,
    ) -> Result<Option<ReviewRecord>, ReviewsDomainError> {
        let statement = format!(
            r#"
            UPDATE hotel_reviews
            SET rating = COALESCE($2, rating),
                comment = COALESCE($3, comment),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {REVIEW_COLUMNS}
        "#
        );

        let row = sqlx::query_as::<_, ReviewRow>(&statement)
            .bind(id)
            .bind(criteria.rating)
            .bind(criteria.comment)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(into_record))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ReviewsDomainError> {
        let result = sqlx::query("DELETE FROM hotel_reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
