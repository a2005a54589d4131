use thiserror::Error;

/// Error for `Authorization` payloads that cannot be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Payload is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("Payload must contain exactly one ':' separator, found {0} parts")]
    WrongPartCount(usize),
}
