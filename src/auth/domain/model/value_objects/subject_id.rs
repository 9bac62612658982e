use crate::auth::domain::model::enums::auth_domain_error::AuthDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(value: String) -> Result<Self, AuthDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AuthDomainError::Unauthenticated);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
