use lazy_static::lazy_static;
use regex::Regex;

use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid pattern");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: String) -> Result<Self, UsersDomainError> {
        let normalized = value.trim().to_lowercase();
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(UsersDomainError::InvalidEmail);
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
