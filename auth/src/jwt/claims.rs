use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload asserting a user's identity.
///
/// `iat` and `exp` are Unix timestamps; `exp` is always present so every
/// issued token is time-limited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub id: u64,

    /// Email the user logged in with
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `id` - User identifier
    /// * `email` - User email address
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with iat set to now and exp set to now + ttl
    pub fn for_user(id: u64, email: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id,
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
