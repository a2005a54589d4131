//! Authentication utilities library
//!
//! Dual-scheme HTTP authentication for services:
//! - `Authorization` header extraction (Basic and Bearer)
//! - Salted SHA3-512 password hashing
//! - Opaque, expiring bearer tokens bound to a server-authoritative clock
//! - Authentication coordination with RFC 7617 / RFC 6750 challenges
//!
//! Services plug in their own user storage through [`UserDirectory`] and
//! their time source through [`Clock`].
//!
//! # Examples
//!
//! ## Header Extraction
//! ```
//! use auth::AuthorizationHeader;
//! use auth::Scheme;
//!
//! let header = AuthorizationHeader::parse(Some("Basic YWxpY2U6c2VjcmV0"));
//! assert_eq!(
//!     header,
//!     AuthorizationHeader::Parsed { scheme: Scheme::Basic, payload: "YWxpY2U6c2VjcmV0" }
//! );
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.derive("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("other_password", &digest));
//! ```
//!
//! ## Challenges
//! ```
//! use auth::ErrorCode;
//! use auth::Rejection;
//! use auth::Scheme;
//!
//! let rejection = Rejection::new(ErrorCode::InvalidRequest, Scheme::Bearer);
//! assert_eq!(rejection.challenge(), r#"Bearer realm="app", error="invalid_request""#);
//! ```

pub mod authenticator;
pub mod binary;
pub mod credentials;
pub mod header;
pub mod outcome;
pub mod password;
pub mod ports;
pub mod scheme;
pub mod token;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use binary::BinaryValue;
pub use binary::EntropyError;
pub use binary::BINARY_LENGTH;
pub use credentials::Authenticatable;
pub use credentials::Credentials;
pub use credentials::IssuedToken;
pub use credentials::PasswordDigest;
pub use header::AuthorizationHeader;
pub use header::BasicCredentials;
pub use outcome::ErrorCode;
pub use outcome::Outcome;
pub use outcome::Rejection;
pub use password::Hasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::Sha3Hasher;
pub use ports::Clock;
pub use ports::ClockError;
pub use ports::DirectoryError;
pub use ports::SystemClock;
pub use ports::UserDirectory;
pub use scheme::DesiredScheme;
pub use scheme::Scheme;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TOKEN_EXPIRATION_SECONDS;
