//! `WWW-Authenticate` challenge values (RFC 7617 and RFC 6750 §3).

use crate::outcome::ErrorCode;
use crate::scheme::Scheme;

/// Protection space advertised in every challenge.
pub const REALM: &str = "app";

/// Build the challenge for a rejected attempt.
///
/// Basic challenges are constant. Bearer challenges carry an `error`
/// attribute only for codes with an RFC 6750 error token.
///
/// ```
/// use auth::header::challenge;
/// use auth::ErrorCode;
/// use auth::Scheme;
///
/// assert_eq!(
///     challenge::build(Scheme::Basic, ErrorCode::InvalidPassword),
///     r#"Basic realm="app", charset="UTF-8""#
/// );
/// assert_eq!(
///     challenge::build(Scheme::Bearer, ErrorCode::InvalidToken),
///     r#"Bearer realm="app", error="invalid_token""#
/// );
/// ```
pub fn build(scheme: Scheme, code: ErrorCode) -> String {
    match scheme {
        Scheme::Basic => basic(),
        Scheme::Bearer => bearer(code),
    }
}

fn basic() -> String {
    format!("Basic realm=\"{}\", charset=\"UTF-8\"", REALM)
}

fn bearer(code: ErrorCode) -> String {
    match code.bearer_error() {
        Some(error) => format!("Bearer realm=\"{}\", error=\"{}\"", REALM, error),
        None => format!("Bearer realm=\"{}\"", REALM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [ErrorCode; 8] = [
        ErrorCode::NoAuthenticationInfo,
        ErrorCode::NoSuchUser,
        ErrorCode::InvalidPassword,
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidToken,
        ErrorCode::NotQualified,
        ErrorCode::WrongAuthenticationMethod,
        ErrorCode::ForcedAuthentication,
    ];

    #[test]
    fn test_basic_challenge_ignores_code() {
        for code in ALL_CODES {
            assert_eq!(
                build(Scheme::Basic, code),
                "Basic realm=\"app\", charset=\"UTF-8\""
            );
        }
    }

    #[test]
    fn test_bearer_challenge_error_suffix() {
        assert_eq!(
            build(Scheme::Bearer, ErrorCode::InvalidRequest),
            "Bearer realm=\"app\", error=\"invalid_request\""
        );
        assert_eq!(
            build(Scheme::Bearer, ErrorCode::InvalidToken),
            "Bearer realm=\"app\", error=\"invalid_token\""
        );
        assert_eq!(
            build(Scheme::Bearer, ErrorCode::NotQualified),
            "Bearer realm=\"app\", error=\"insufficient_scope\""
        );
    }

    #[test]
    fn test_bearer_challenge_hides_user_existence() {
        for code in [
            ErrorCode::NoAuthenticationInfo,
            ErrorCode::NoSuchUser,
            ErrorCode::InvalidPassword,
            ErrorCode::WrongAuthenticationMethod,
            ErrorCode::ForcedAuthentication,
        ] {
            assert_eq!(build(Scheme::Bearer, code), "Bearer realm=\"app\"");
        }
    }
}
