use chrono::DateTime;
use chrono::Utc;

use crate::binary::BinaryValue;

/// Salted password digest, always replaced as a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    pub hash: BinaryValue,
    pub salt: BinaryValue,
}

/// Opaque token together with the server time it was issued at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub value: BinaryValue,
    pub issued_at: DateTime<Utc>,
}

/// Credential material stored for a user.
///
/// At most one token exists at a time; issuing a new one overwrites `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub password: PasswordDigest,
    pub token: Option<IssuedToken>,
}

impl Credentials {
    /// Credentials for a freshly set password, with no token issued yet.
    pub fn new(password: PasswordDigest) -> Self {
        Self {
            password,
            token: None,
        }
    }
}

/// A user record the authenticator can verify and update.
pub trait Authenticatable: Send + Sync {
    /// Unique lookup name, also embedded in bearer tokens.
    fn name(&self) -> &str;

    fn credentials(&self) -> &Credentials;

    fn credentials_mut(&mut self) -> &mut Credentials;
}
