use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Length in bytes of every binary credential field (hash, salt, token).
pub const BINARY_LENGTH: usize = 64;

/// The operating system random source could not be read.
#[derive(Debug, Clone, Error)]
#[error("Secure random source unavailable: {0}")]
pub struct EntropyError(String);

/// Fixed-length binary credential material.
///
/// Equality is evaluated in constant time and `Debug` never prints the bytes.
#[derive(Clone)]
pub struct BinaryValue([u8; BINARY_LENGTH]);

impl BinaryValue {
    /// Generate a value from the OS CSPRNG.
    ///
    /// # Errors
    /// * `EntropyError` - The random source failed
    pub fn random() -> Result<Self, EntropyError> {
        let mut bytes = [0u8; BINARY_LENGTH];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| EntropyError(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Build a value from a slice, `None` unless it is exactly `BINARY_LENGTH` long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; BINARY_LENGTH]>::try_from(bytes).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BINARY_LENGTH]> for BinaryValue {
    fn from(bytes: [u8; BINARY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl PartialEq for BinaryValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for BinaryValue {}

impl fmt::Debug for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BinaryValue(..)")
    }
}
