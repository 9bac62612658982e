use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

#[derive(Clone, Debug)]
pub struct FindUserQuery {
    external_id: Option<String>,
    email: Option<String>,
}

impl FindUserQuery {
    pub fn new(
        external_id: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UsersDomainError> {
        let external_id = external_id
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty());
        let email = email
            .map(|raw| raw.trim().to_lowercase())
            .filter(|value| !value.is_empty());

        if external_id.is_none() && email.is_none() {
            return Err(UsersDomainError::MissingLookupCriteria);
        }

        Ok(Self { external_id, email })
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
