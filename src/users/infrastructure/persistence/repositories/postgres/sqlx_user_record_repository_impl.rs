use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::{
    domain::model::{entities::user_record::UserRecord, enums::users_domain_error::UsersDomainError},
    infrastructure::persistence::repositories::user_record_repository::{
        NewUserRecord, UserRecordRepository,
    },
};

const USER_COLUMNS: &str = r#"
    id, external_id, email, display_name, photo_url, role, status,
    bookings_count, properties_count, total_spent, total_revenue,
    last_login, created_at, updated_at
"#;

#[derive(sqlx::FromRow)]
struct UserRecordRow {
    id: Uuid,
    external_id: Option<String>,
    email: String,
    display_name: String,
    photo_url: Option<String>,
    role: String,
    status: String,
    bookings_count: i64,
    properties_count: i64,
    total_spent: f64,
    total_revenue: f64,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRecordRow {
    fn into_record(self) -> Result<UserRecord, UsersDomainError> {
        Ok(UserRecord {
            id: self.id,
            external_id: self.external_id,
            email: self.email,
            display_name: self.display_name,
            photo_url: self.photo_url,
            role: self
                .role
                .parse()
                .map_err(UsersDomainError::InfrastructureError)?,
            status: self
                .status
                .parse()
                .map_err(UsersDomainError::InfrastructureError)?,
            bookings_count: self.bookings_count,
            properties_count: self.properties_count,
            total_spent: self.total_spent,
            total_revenue: self.total_revenue,
            last_login: self.last_login,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub struct SqlxUserRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxUserRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_by(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError> {
        let statement = format!(
            "SELECT {USER_COLUMNS} FROM marketplace_users WHERE {column} = $1"
        );

        let row = sqlx::query_as::<_, UserRecordRow>(&statement)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        row.map(UserRecordRow::into_record).transpose()
    }
}

#[async_trait]
impl UserRecordRepository for SqlxUserRecordRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UsersDomainError> {
        let statement = format!("SELECT {USER_COLUMNS} FROM marketplace_users WHERE id = $1");

        let row = sqlx::query_as::<_, UserRecordRow>(&statement)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        row.map(UserRecordRow::into_record).transpose()
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError> {
        self.fetch_one_by("external_id", external_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UsersDomainError> {
        self.fetch_one_by("email", email).await
    }

    async fn create_or_fetch(
        &self,
        draft: NewUserRecord,
    ) -> Result<UserRecord, UsersDomainError> {
        let statement = format!(
            r#"
            INSERT INTO marketplace_users (
                id, external_id, email, display_name, photo_url, role, status,
                bookings_count, properties_count, total_spent, total_revenue,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, 'guest', 'active', 0, 0, 0, 0, NOW(), NOW())
            ON CONFLICT (email)
            DO UPDATE SET updated_at = marketplace_users.updated_at
            RETURNING {USER_COLUMNS}
        "#
        );

        let row = sqlx::query_as::<_, UserRecordRow>(&statement)
            .bind(Uuid::now_v7())
            .bind(draft.external_id)
            .bind(draft.email)
            .bind(draft.display_name)
            .bind(draft.photo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        row.into_record()
    }

    async fn backfill_external_id(
        &self,
        id: Uuid,
        external_id: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError> {
        let statement = format!(
            r#"
            UPDATE marketplace_users
            SET external_id = $2, last_login = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
        "#
        );

        let row = sqlx::query_as::<_, UserRecordRow>(&statement)
            .bind(id)
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        row.map(UserRecordRow::into_record).transpose()
    }

    async fn promote_to_admin(&self, id: Uuid) -> Result<Option<UserRecord>, UsersDomainError> {
        let statement = format!(
            r#"
            UPDATE marketplace_users
            SET role = 'admin', status = 'active', updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
        "#
        );

        let row = sqlx::query_as::<_, UserRecordRow>(&statement)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        row.map(UserRecordRow::into_record).transpose()
    }
}
