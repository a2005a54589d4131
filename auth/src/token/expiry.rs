use chrono::DateTime;
use chrono::Utc;

use crate::binary::BinaryValue;
use crate::credentials::IssuedToken;

/// Lifetime of an issued token: 24 hours.
pub const TOKEN_EXPIRATION_SECONDS: i64 = 86_400;

impl IssuedToken {
    /// Constant-time comparison with a presented token.
    pub fn matches(&self, presented: &BinaryValue) -> bool {
        self.value == *presented
    }

    /// Whether `0 <= now - issued_at <= TOKEN_EXPIRATION_SECONDS`, in whole seconds.
    ///
    /// A token issued after `now` signals clock skew or corruption and is
    /// never fresh.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        let elapsed = now.timestamp() - self.issued_at.timestamp();
        (0..=TOKEN_EXPIRATION_SECONDS).contains(&elapsed)
    }
}
