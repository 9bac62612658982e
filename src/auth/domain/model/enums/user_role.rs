use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    Partner,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Partner => "partner",
            Self::Admin => "admin",
        }
    }

    pub fn satisfies(&self, required: UserRole) -> bool {
        *self == required || *self == Self::Admin
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "guest" => Ok(Self::Guest),
            "partner" => Ok(Self::Partner),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role stored: {other}")),
        }
    }
}
