use thiserror::Error;

/// Failure of the hashing primitive itself (never a password mismatch).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password digest could not be checked: {0}")]
    VerificationFailed(String),
}
