use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use hotel_marketplace_api::{
    auth::domain::{
        model::{
            entities::authenticated_principal::AuthenticatedPrincipal,
            enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
            value_objects::subject_id::SubjectId,
        },
        services::access_guard_service::AccessGuardService,
    },
    reviews::{
        domain::model::{
            entities::review_record::ReviewRecord,
            enums::reviews_domain_error::ReviewsDomainError,
        },
        infrastructure::persistence::repositories::review_record_repository::{
            ReviewRecordRepository, ReviewUpdateCriteria,
        },
    },
};
use uuid::Uuid;

pub struct FakeReviewRecordRepository {
    records: Mutex<Vec<ReviewRecord>>,
}

impl FakeReviewRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn insert_record(&self, record: ReviewRecord) {
        self.records.lock().expect("mutex poisoned").push(record);
    }
}

#[async_trait]
impl ReviewRecordRepository for FakeReviewRecordRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ReviewRecord>, ReviewsDomainError> {
        let records = self.records.lock().expect("mutex poisoned");
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        criteria: ReviewUpdateCriteria,
    ) -> Result<Option<ReviewRecord>, ReviewsDomainError> {
        let mut records = self.records.lock().expect("mutex poisoned");
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(rating) = criteria.rating {
            record.rating = rating;
        }
        if let Some(comment) = criteria.comment {
            record.comment = comment;
        }
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ReviewsDomainError> {
        let mut records = self.records.lock().expect("mutex poisoned");
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}

pub struct FakeAccessGuardService {
    principal_role: Mutex<Option<UserRole>>,
}

impl FakeAccessGuardService {
    pub fn new() -> Self {
        Self {
            principal_role: Mutex::new(None),
        }
    }

    pub fn authenticate_as(&self, role: UserRole) {
        *self.principal_role.lock().expect("mutex poisoned") = Some(role);
    }

    fn principal(&self) -> Option<AuthenticatedPrincipal> {
        (*self.principal_role.lock().expect("mutex poisoned")).map(|role| AuthenticatedPrincipal {
            subject_id: SubjectId::new("subject-1".to_string()).expect("valid subject"),
            email: Some("subject@example.com".to_string()),
            role,
        })
    }
}

#[async_trait]
impl AccessGuardService for FakeAccessGuardService {
    async fn handle_require_authenticated(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<AuthenticatedPrincipal, AuthDomainError> {
        if authorization_header.is_none() {
            return Err(AuthDomainError::Unauthenticated);
        }
        self.principal().ok_or(AuthDomainError::Unauthenticated)
    }

    async fn handle_require_role(
        &self,
        authorization_header: Option<&str>,
        required_role: UserRole,
    ) -> Result<AuthenticatedPrincipal, AuthDomainError> {
        let principal = self
            .handle_require_authenticated(authorization_header)
            .await?;
        if !principal.role.satisfies(required_role) {
            return Err(AuthDomainError::Forbidden);
        }
        Ok(principal)
    }
}
