use std::sync::Arc;

use super::bearer::encode_bearer_token;
use super::errors::TokenError;
use crate::binary::BinaryValue;
use crate::credentials::Authenticatable;
use crate::credentials::IssuedToken;
use crate::ports::Clock;
use crate::ports::UserDirectory;

/// Issues opaque tokens bound to a user and a server-authoritative time.
///
/// Every issuance overwrites the user's previous token, so only the most
/// recently issued token ever validates.
pub struct TokenIssuer<D, C> {
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> TokenIssuer<D, C>
where
    D: UserDirectory,
    C: Clock,
{
    pub fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Generate and persist a new token for `user`.
    ///
    /// # Arguments
    /// * `user` - User receiving the token; its credentials are updated once
    ///   the token is stored
    ///
    /// # Returns
    /// Raw token bytes
    ///
    /// # Errors
    /// * `GenerationFailed` - OS random source failed
    /// * `Clock` - Issue time could not be read
    /// * `Directory` - Token could not be persisted
    pub async fn issue(&self, user: &mut D::User) -> Result<BinaryValue, TokenError> {
        let value = BinaryValue::random()?;
        let issued_at = self.clock.now().await?;

        let token = IssuedToken {
            value: value.clone(),
            issued_at,
        };
        self.directory.persist_token(user, &token).await?;
        user.credentials_mut().token = Some(token);

        tracing::info!(user = %user.name(), issued_at = %issued_at, "Bearer token issued");

        Ok(value)
    }

    /// Issue a new token and encode it as a bearer token string.
    ///
    /// Not idempotent: each call invalidates every earlier token.
    pub async fn bearer_token(&self, user: &mut D::User) -> Result<String, TokenError> {
        let value = self.issue(user).await?;
        Ok(encode_bearer_token(user.name(), &value))
    }
}
