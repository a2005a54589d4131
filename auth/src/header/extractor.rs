use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::PayloadError;
use crate::scheme::Scheme;

/// Structured view of a raw `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationHeader<'a> {
    /// No header, or an empty one.
    Missing,
    /// The scheme token is neither `Basic` nor `Bearer`.
    UnrecognizedScheme,
    /// A known scheme without a payload, or with an empty field before it.
    MalformedPayload(Scheme),
    Parsed { scheme: Scheme, payload: &'a str },
}

impl<'a> AuthorizationHeader<'a> {
    /// Split a header value on its first space into scheme and payload.
    ///
    /// # Arguments
    /// * `header` - Raw header value, `None` when the request carried none
    ///
    /// # Returns
    /// Extraction result; never fails
    pub fn parse(header: Option<&'a str>) -> Self {
        let value = match header {
            Some(value) if !value.is_empty() => value,
            _ => return AuthorizationHeader::Missing,
        };

        let (token, payload) = match value.split_once(' ') {
            Some((token, payload)) => (token, payload),
            None => (value, ""),
        };

        let Some(scheme) = Scheme::from_token(token) else {
            return AuthorizationHeader::UnrecognizedScheme;
        };

        // The payload is the second space-separated field; doubled spaces leave it empty.
        if payload.is_empty() || payload.starts_with(' ') {
            return AuthorizationHeader::MalformedPayload(scheme);
        }

        AuthorizationHeader::Parsed { scheme, payload }
    }
}

/// Decoded Basic credentials (`base64(username ":" password)`).
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decode a Basic payload.
    ///
    /// # Errors
    /// * `InvalidBase64` - Payload is not standard padded base64
    /// * `InvalidUtf8` - Decoded bytes are not UTF-8
    /// * `WrongPartCount` - Decoded text is not exactly `username:password`
    pub fn decode(payload: &str) -> Result<Self, PayloadError> {
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| PayloadError::InvalidBase64(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|_| PayloadError::InvalidUtf8)?;

        let parts: Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [username, password] => Ok(Self {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(PayloadError::WrongPartCount(parts.len())),
        }
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
