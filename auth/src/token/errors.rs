use thiserror::Error;

use crate::binary::EntropyError;
use crate::ports::ClockError;
use crate::ports::DirectoryError;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(#[from] EntropyError),

    #[error("Failed to read issue time: {0}")]
    Clock(#[from] ClockError),

    #[error("Failed to store token: {0}")]
    Directory(#[from] DirectoryError),
}

/// Error for bearer token strings that cannot be split into name and token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BearerTokenError {
    #[error("Bearer token must contain exactly one ':' separator, found {0} parts")]
    WrongPartCount(usize),

    #[error("Bearer token name is not valid base64: {0}")]
    InvalidName(String),

    #[error("Bearer token name is not valid UTF-8")]
    InvalidNameEncoding,
}
