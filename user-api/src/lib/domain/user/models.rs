use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// User record.
///
/// Serialized exactly as stored, digest included, under the field names
/// clients already use (`nome`, `password`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(UserId)
            .map_err(|_| UserIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record about to be inserted; the repository assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

/// Command to register a user. All fields are known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserCommand {
    /// Build a command from possibly-missing fields.
    ///
    /// # Errors
    /// * `MissingFields` - Any field is absent or empty
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, UserError> {
        match (present(name), present(email), present(password)) {
            (Some(name), Some(email), Some(password)) => Ok(Self {
                name,
                email,
                password,
            }),
            _ => Err(UserError::MissingFields),
        }
    }
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserCommand {
    pub fn new(name: Option<String>, email: Option<String>, password: Option<String>) -> Self {
        Self {
            name,
            email,
            password: present(password),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
