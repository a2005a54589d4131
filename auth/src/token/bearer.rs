use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::BearerTokenError;
use crate::binary::BinaryValue;

/// Bearer token split into its name and still-encoded token part.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedBearerToken {
    pub name: String,
    /// Token part exactly as presented by the client.
    pub token: String,
}

impl fmt::Debug for DecodedBearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedBearerToken")
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Encode a bearer token as `base64(name) ":" base64(token)`.
///
/// ```
/// use auth::token::encode_bearer_token;
/// use auth::BinaryValue;
///
/// let token = BinaryValue::from([0u8; 64]);
/// let bearer = encode_bearer_token("alice", &token);
/// assert!(bearer.starts_with("YWxpY2U=:"));
/// ```
pub fn encode_bearer_token(name: &str, token: &BinaryValue) -> String {
    format!(
        "{}:{}",
        STANDARD.encode(name.as_bytes()),
        STANDARD.encode(token.as_bytes())
    )
}

/// Split a bearer token into name and token part.
///
/// Only the name is decoded here; the token part is compared later by
/// `decode_token_value`.
///
/// # Errors
/// * `WrongPartCount` - Not exactly two `:`-separated parts
/// * `InvalidName` - Name part is not standard padded base64
/// * `InvalidNameEncoding` - Decoded name is not UTF-8
pub fn decode_bearer_token(payload: &str) -> Result<DecodedBearerToken, BearerTokenError> {
    let parts: Vec<&str> = payload.split(':').collect();
    let [name, token] = parts.as_slice() else {
        return Err(BearerTokenError::WrongPartCount(parts.len()));
    };

    let name = STANDARD
        .decode(name)
        .map_err(|e| BearerTokenError::InvalidName(e.to_string()))?;
    let name = String::from_utf8(name).map_err(|_| BearerTokenError::InvalidNameEncoding)?;

    Ok(DecodedBearerToken {
        name,
        token: token.to_string(),
    })
}

/// Decode the token part of a bearer token into raw bytes.
///
/// Returns `None` for invalid base64 or a length other than 64 bytes.
pub fn decode_token_value(token: &str) -> Option<BinaryValue> {
    let bytes = STANDARD.decode(token).ok()?;
    BinaryValue::from_slice(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::BINARY_LENGTH;

    #[test]
    fn test_encode_layout() {
        let token = BinaryValue::from([0xabu8; BINARY_LENGTH]);
        let bearer = encode_bearer_token("alice", &token);

        let (name, value) = bearer.split_once(':').expect("Missing separator");
        assert_eq!(name, "YWxpY2U=");
        assert_eq!(value, STANDARD.encode([0xabu8; BINARY_LENGTH]));
    }

    #[test]
    fn test_round_trip_recovers_name_and_bytes() {
        let token = BinaryValue::random().expect("Failed to generate token");
        let bearer = encode_bearer_token("alice", &token);

        let decoded = decode_bearer_token(&bearer).expect("Failed to decode bearer token");
        assert_eq!(decoded.name, "alice");
        assert_eq!(decode_token_value(&decoded.token), Some(token));
    }

    #[test]
    fn test_decode_keeps_token_part_verbatim() {
        let payload = format!("{}:garbage", STANDARD.encode("alice"));

        let decoded = decode_bearer_token(&payload).expect("Failed to decode bearer token");
        assert_eq!(decoded.name, "alice");
        assert_eq!(decoded.token, "garbage");
        assert_eq!(decode_token_value(&decoded.token), None);
    }

    #[test]
    fn test_decode_rejects_wrong_part_count() {
        assert_eq!(
            decode_bearer_token("YWxpY2U="),
            Err(BearerTokenError::WrongPartCount(1))
        );
        assert_eq!(
            decode_bearer_token("YWxpY2U=:a:b"),
            Err(BearerTokenError::WrongPartCount(3))
        );
    }

    #[test]
    fn test_decode_rejects_invalid_name() {
        assert!(matches!(
            decode_bearer_token("%%%:token"),
            Err(BearerTokenError::InvalidName(_))
        ));
        assert_eq!(
            decode_bearer_token(&format!("{}:token", STANDARD.encode([0xffu8, 0xfe]))),
            Err(BearerTokenError::InvalidNameEncoding)
        );
    }

    #[test]
    fn test_decode_token_value_requires_full_length() {
        assert_eq!(decode_token_value(&STANDARD.encode([1u8; 32])), None);
        assert!(decode_token_value(&STANDARD.encode([1u8; BINARY_LENGTH])).is_some());
    }
}
