use crate::users::domain::model::{
    enums::users_domain_error::UsersDomainError, value_objects::email_address::EmailAddress,
};

pub struct RegisterUserCommandParts {
    pub external_id: Option<String>,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RegisterUserCommand {
    external_id: Option<String>,
    email: EmailAddress,
    display_name: String,
    photo_url: Option<String>,
}

impl RegisterUserCommand {
    pub fn new(parts: RegisterUserCommandParts) -> Result<Self, UsersDomainError> {
        let external_id = match parts.external_id {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(UsersDomainError::InvalidExternalId);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        Ok(Self {
            external_id,
            email: EmailAddress::new(parts.email)?,
            display_name: parts.display_name.trim().to_string(),
            photo_url: parts.photo_url.filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }
}
