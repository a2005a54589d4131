use std::sync::Arc;

use crate::credentials::Authenticatable;
use crate::header::AuthorizationHeader;
use crate::header::BasicCredentials;
use crate::outcome::ErrorCode;
use crate::outcome::Outcome;
use crate::outcome::Rejection;
use crate::password::Hasher;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::Sha3Hasher;
use crate::ports::Clock;
use crate::ports::ClockError;
use crate::ports::DirectoryError;
use crate::ports::UserDirectory;
use crate::scheme::DesiredScheme;
use crate::scheme::Scheme;
use crate::token::decode_bearer_token;
use crate::token::decode_token_value;
use crate::token::TokenError;
use crate::token::TokenIssuer;

/// Authentication coordinator for Basic and Bearer credentials.
///
/// Resolves an `Authorization` header to a user or to a `Rejection`, and
/// owns the two credential writes: setting a password and issuing a token.
pub struct Authenticator<D, C, H = Sha3Hasher> {
    directory: Arc<D>,
    clock: Arc<C>,
    password_hasher: PasswordHasher<H>,
    token_issuer: TokenIssuer<D, C>,
}

/// Infrastructure failures during authentication.
///
/// These are not authentication outcomes and should surface as server errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl<D, C> Authenticator<D, C, Sha3Hasher>
where
    D: UserDirectory,
    C: Clock,
{
    /// Create an authenticator hashing passwords with SHA3-512.
    ///
    /// # Arguments
    /// * `directory` - User lookup and persistence
    /// * `clock` - Authoritative time source for token issuance and expiry
    pub fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self::with_hasher(directory, clock, Sha3Hasher)
    }
}

impl<D, C, H> Authenticator<D, C, H>
where
    D: UserDirectory,
    C: Clock,
    H: Hasher,
{
    pub fn with_hasher(directory: Arc<D>, clock: Arc<C>, hasher: H) -> Self {
        Self {
            token_issuer: TokenIssuer::new(Arc::clone(&directory), Arc::clone(&clock)),
            directory,
            clock,
            password_hasher: PasswordHasher::with_hasher(hasher),
        }
    }

    pub fn password_hasher(&self) -> &PasswordHasher<H> {
        &self.password_hasher
    }

    /// Authenticate a request from its `Authorization` header.
    ///
    /// # Arguments
    /// * `header` - Raw header value, `None` if absent
    /// * `desired` - Scheme the resource accepts
    /// * `fallback` - Scheme to challenge with when `desired` is `Any` and the
    ///   client gave no usable scheme
    ///
    /// # Returns
    /// `Authenticated(user)` or `Rejected` with the code and challenge scheme.
    /// When `desired` names a scheme, every rejection challenges with it.
    ///
    /// # Errors
    /// * `Directory` - User lookup failed
    /// * `Clock` - Current time could not be read for token validation
    pub async fn authenticate(
        &self,
        header: Option<&str>,
        desired: DesiredScheme,
        fallback: Scheme,
    ) -> Result<Outcome<D::User>, AuthenticationError> {
        let required = desired.required();
        let fallback = required.unwrap_or(fallback);

        let (scheme, payload) = match AuthorizationHeader::parse(header) {
            AuthorizationHeader::Missing => {
                return Ok(self.reject(ErrorCode::NoAuthenticationInfo, fallback))
            }
            AuthorizationHeader::UnrecognizedScheme => {
                return Ok(self.reject(ErrorCode::InvalidRequest, fallback))
            }
            AuthorizationHeader::MalformedPayload(scheme) => {
                return Ok(self.reject(ErrorCode::InvalidRequest, required.unwrap_or(scheme)))
            }
            AuthorizationHeader::Parsed { scheme, payload } => (scheme, payload),
        };

        if let Some(required) = required {
            if required != scheme {
                return Ok(self.reject(ErrorCode::WrongAuthenticationMethod, required));
            }
        }

        match scheme {
            Scheme::Basic => self.authenticate_basic(payload).await,
            Scheme::Bearer => self.authenticate_bearer(payload).await,
        }
    }

    async fn authenticate_basic(
        &self,
        payload: &str,
    ) -> Result<Outcome<D::User>, AuthenticationError> {
        let credentials = match BasicCredentials::decode(payload) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable basic payload");
                return Ok(self.reject(ErrorCode::InvalidRequest, Scheme::Basic));
            }
        };

        let Some(user) = self.directory.find_by_name(&credentials.username).await? else {
            return Ok(self.reject(ErrorCode::NoSuchUser, Scheme::Basic));
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &user.credentials().password)
        {
            return Ok(self.reject(ErrorCode::InvalidPassword, Scheme::Basic));
        }

        Ok(self.accept(user, Scheme::Basic))
    }

    async fn authenticate_bearer(
        &self,
        payload: &str,
    ) -> Result<Outcome<D::User>, AuthenticationError> {
        let decoded = match decode_bearer_token(payload) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable bearer token");
                return Ok(self.reject(ErrorCode::InvalidToken, Scheme::Bearer));
            }
        };

        let Some(user) = self.directory.find_by_name(&decoded.name).await? else {
            return Ok(self.reject(ErrorCode::NoSuchUser, Scheme::Bearer));
        };

        let matches = match (&user.credentials().token, decode_token_value(&decoded.token)) {
            (Some(issued), Some(presented)) => issued.matches(&presented),
            _ => false,
        };
        if !matches {
            return Ok(self.reject(ErrorCode::InvalidToken, Scheme::Bearer));
        }

        let now = self.clock.now().await?;
        let fresh = user
            .credentials()
            .token
            .as_ref()
            .is_some_and(|issued| issued.is_fresh_at(now));
        if !fresh {
            return Ok(self.reject(ErrorCode::InvalidToken, Scheme::Bearer));
        }

        Ok(self.accept(user, Scheme::Bearer))
    }

    /// Replace the password of `user` with a freshly salted digest and persist it.
    ///
    /// Salt and hash are written together and assigned to `user` only once
    /// stored. The token pair is not touched.
    ///
    /// # Errors
    /// * `Password` - Salt generation failed
    /// * `Directory` - Persisting failed
    pub async fn set_password(
        &self,
        user: &mut D::User,
        password: &str,
    ) -> Result<(), AuthenticationError> {
        let digest = self.password_hasher.derive(password)?;
        self.directory.persist_password(user, &digest).await?;
        user.credentials_mut().password = digest;

        tracing::info!(user = %user.name(), "Password updated");

        Ok(())
    }

    /// Issue a new bearer token for `user`, invalidating any previous one.
    ///
    /// # Errors
    /// * `TokenError` - Generation, clock or persistence failed
    pub async fn bearer_token(&self, user: &mut D::User) -> Result<String, TokenError> {
        self.token_issuer.bearer_token(user).await
    }

    fn reject(&self, code: ErrorCode, scheme: Scheme) -> Outcome<D::User> {
        tracing::debug!(code = %code, scheme = %scheme, "Authentication rejected");
        Outcome::Rejected(Rejection::new(code, scheme))
    }

    fn accept(&self, user: D::User, scheme: Scheme) -> Outcome<D::User> {
        tracing::debug!(user = %user.name(), scheme = %scheme, "Authentication succeeded");
        Outcome::Authenticated(user)
    }
}
