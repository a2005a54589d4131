use std::fmt;

use crate::header::challenge;
use crate::scheme::Scheme;

/// Reason an authentication attempt was rejected.
///
/// Drives both control flow and the `error` attribute of bearer challenges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The client sent no `Authorization` header.
    NoAuthenticationInfo,
    NoSuchUser,
    InvalidPassword,
    /// Unrecognised scheme, missing payload or undecodable payload.
    InvalidRequest,
    InvalidToken,
    /// Reserved for role checks, never produced by the authenticator.
    NotQualified,
    /// The client used a scheme the resource does not accept.
    WrongAuthenticationMethod,
    /// Reserved for re-authentication after logout, never produced by the authenticator.
    ForcedAuthentication,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NoAuthenticationInfo => "NO_AUTHENTICATION_INFO",
            ErrorCode::NoSuchUser => "NO_SUCH_USER",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::NotQualified => "NOT_QUALIFIED",
            ErrorCode::WrongAuthenticationMethod => "WRONG_AUTHENTICATION_METHOD",
            ErrorCode::ForcedAuthentication => "FORCED_AUTHENTICATION",
        }
    }

    /// RFC 6750 §3.1 error token reported in bearer challenges.
    ///
    /// Codes outside the mapped set return `None` so the challenge does not
    /// reveal whether the user exists.
    pub fn bearer_error(&self) -> Option<&'static str> {
        match self {
            ErrorCode::InvalidRequest => Some("invalid_request"),
            ErrorCode::InvalidToken => Some("invalid_token"),
            ErrorCode::NotQualified => Some("insufficient_scope"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected attempt and the scheme the client should be challenged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub code: ErrorCode,
    pub scheme: Scheme,
}

impl Rejection {
    pub fn new(code: ErrorCode, scheme: Scheme) -> Self {
        Self { code, scheme }
    }

    /// `WWW-Authenticate` value for this rejection.
    pub fn challenge(&self) -> String {
        challenge::build(self.scheme, self.code)
    }
}

/// Terminal state of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<U> {
    Authenticated(U),
    Rejected(Rejection),
}

impl<U> Outcome<U> {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Authenticated(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }

    pub fn into_user(self) -> Option<U> {
        match self {
            Outcome::Authenticated(user) => Some(user),
            Outcome::Rejected(_) => None,
        }
    }
}
