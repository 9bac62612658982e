use uuid::Uuid;

use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

#[derive(Clone, Debug)]
pub struct ReconcileSubjectCommand {
    user_id: Uuid,
    external_id: String,
}

impl ReconcileSubjectCommand {
    pub fn new(user_id: Uuid, external_id: String) -> Result<Self, UsersDomainError> {
        let trimmed = external_id.trim();
        if trimmed.is_empty() {
            return Err(UsersDomainError::InvalidExternalId);
        }

        Ok(Self {
            user_id,
            external_id: trimmed.to_string(),
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }
    pub fn external_id(&self) -> &str {
        &self.external_id
    }
}
