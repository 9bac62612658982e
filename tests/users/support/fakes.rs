use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use hotel_marketplace_api::users::{
    domain::model::{
        entities::user_record::UserRecord, enums::users_domain_error::UsersDomainError,
    },
    infrastructure::persistence::repositories::user_record_repository::{
        NewUserRecord, UserRecordRepository,
    },
};
use uuid::Uuid;

#[derive(Default)]
struct FakeUserRecordState {
    records: Vec<UserRecord>,
    create_or_fetch_calls: usize,
    backfill_calls: usize,
}

pub struct FakeUserRecordRepository {
    state: Mutex<FakeUserRecordState>,
}

impl FakeUserRecordRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeUserRecordState::default()),
        }
    }

    pub fn insert_record(&self, record: UserRecord) {
        self.state.lock().expect("mutex poisoned").records.push(record);
    }

    pub fn create_or_fetch_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").create_or_fetch_calls
    }

    pub fn backfill_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").backfill_calls
    }
}

#[async_trait]
impl UserRecordRepository for FakeUserRecordRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UsersDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .records
            .iter()
            .find(|r| r.external_id.as_deref() == Some(external_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UsersDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.records.iter().find(|r| r.email == email).cloned())
    }

    async fn create_or_fetch(
        &self,
        draft: NewUserRecord,
    ) -> Result<UserRecord, UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.create_or_fetch_calls += 1;

        if let Some(existing) = state.records.iter().find(|r| r.email == draft.email) {
            return Ok(existing.clone());
        }

        let record = UserRecord {
            id: Uuid::now_v7(),
            external_id: draft.external_id,
            email: draft.email,
            display_name: draft.display_name,
            photo_url: draft.photo_url,
            role: "guest".parse().expect("valid role"),
            status: "active".parse().expect("valid status"),
            bookings_count: 0,
            properties_count: 0,
            total_spent: 0.0,
            total_revenue: 0.0,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state.records.push(record.clone());
        Ok(record)
    }

    async fn backfill_external_id(
        &self,
        id: Uuid,
        external_id: &str,
    ) -> Result<Option<UserRecord>, UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.backfill_calls += 1;

        let Some(record) = state.records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.external_id = Some(external_id.to_string());
        record.last_login = Some(Utc::now());
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn promote_to_admin(&self, id: Uuid) -> Result<Option<UserRecord>, UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let Some(record) = state.records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.role = "admin".parse().expect("valid role");
        record.status = "active".parse().expect("valid status");
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }
}
