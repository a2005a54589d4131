use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use thiserror::Error;

use crate::credentials::Authenticatable;
use crate::credentials::IssuedToken;
use crate::credentials::PasswordDigest;

/// Error raised by a user directory implementation.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("User lookup failed: {0}")]
    LookupFailed(String),

    #[error("User persistence failed: {0}")]
    PersistFailed(String),
}

/// Error raised when the authoritative clock cannot be read.
#[derive(Debug, Clone, Error)]
pub enum ClockError {
    #[error("Clock unavailable: {0}")]
    Unavailable(String),
}

/// Lookup and persistence of user credential material.
///
/// Implementations own their timeout and retry policy; the authenticator
/// never retries a failed call.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    type User: Authenticatable;

    /// Find a user by unique name.
    ///
    /// # Arguments
    /// * `name` - Name decoded from the client credentials
    ///
    /// # Returns
    /// Optional user (None if no user carries this name)
    ///
    /// # Errors
    /// * `LookupFailed` - Backend operation failed
    async fn find_by_name(&self, name: &str) -> Result<Option<Self::User>, DirectoryError>;

    /// Store a new password hash and salt for `user` in a single write.
    ///
    /// Only the password pair is written; the token pair is left untouched.
    ///
    /// # Errors
    /// * `PersistFailed` - Backend operation failed or the user vanished
    async fn persist_password(
        &self,
        user: &Self::User,
        password: &PasswordDigest,
    ) -> Result<(), DirectoryError>;

    /// Store a new token and its issue time for `user` in a single write.
    ///
    /// Only the token pair is written; the password pair is left untouched.
    ///
    /// # Errors
    /// * `PersistFailed` - Backend operation failed or the user vanished
    async fn persist_token(
        &self,
        user: &Self::User,
        token: &IssuedToken,
    ) -> Result<(), DirectoryError>;
}

/// Single authoritative time source shared by token issuance and validation.
#[async_trait]
pub trait Clock: Send + Sync + 'static {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// Clock backed by the local system time.
///
/// Only authoritative when a single process both issues and validates tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}
