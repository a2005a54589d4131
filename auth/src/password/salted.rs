use sha3::Digest;
use sha3::Sha3_512;

use super::errors::PasswordError;
use crate::binary::BinaryValue;
use crate::binary::BINARY_LENGTH;
use crate::credentials::PasswordDigest;

/// One-way digest of a password and its salt.
///
/// Implementations must be deterministic: the same password and salt always
/// produce the same digest, otherwise stored credentials stop verifying.
pub trait Hasher: Send + Sync + 'static {
    fn digest(&self, password: &str, salt: &BinaryValue) -> BinaryValue;
}

/// SHA3-512 over `password || ":" || salt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3Hasher;

impl Hasher for Sha3Hasher {
    fn digest(&self, password: &str, salt: &BinaryValue) -> BinaryValue {
        let mut hasher = Sha3_512::new();
        hasher.update(password.as_bytes());
        hasher.update(b":");
        hasher.update(salt.as_bytes());

        let mut bytes = [0u8; BINARY_LENGTH];
        bytes.copy_from_slice(&hasher.finalize());
        BinaryValue::from(bytes)
    }
}

/// Password hashing implementation.
///
/// Derives salted digests and verifies candidate passwords against them.
/// Stateless apart from the injected `Hasher`.
pub struct PasswordHasher<H = Sha3Hasher> {
    hasher: H,
}

impl PasswordHasher<Sha3Hasher> {
    /// Create a password hasher using SHA3-512.
    pub fn new() -> Self {
        Self {
            hasher: Sha3Hasher,
        }
    }
}

impl Default for PasswordHasher<Sha3Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hasher> PasswordHasher<H> {
    /// Create a password hasher around a custom digest function.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Hash a password with the given salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    /// * `salt` - Salt stored alongside the digest
    ///
    /// # Returns
    /// 64-byte digest
    pub fn hash(&self, password: &str, salt: &BinaryValue) -> BinaryValue {
        self.hasher.digest(password, salt)
    }

    /// Generate a fresh random salt.
    ///
    /// # Errors
    /// * `SaltGenerationFailed` - OS random source failed
    pub fn new_salt(&self) -> Result<BinaryValue, PasswordError> {
        Ok(BinaryValue::random()?)
    }

    /// Derive a new digest for a password, with a salt never used before.
    ///
    /// # Errors
    /// * `SaltGenerationFailed` - OS random source failed
    pub fn derive(&self, password: &str) -> Result<PasswordDigest, PasswordError> {
        let salt = self.new_salt()?;
        let hash = self.hash(password, &salt);
        Ok(PasswordDigest { hash, salt })
    }

    /// Verify a password against a stored digest.
    ///
    /// The digests are compared in constant time.
    pub fn verify(&self, password: &str, digest: &PasswordDigest) -> bool {
        self.hash(password, &digest.salt) == digest.hash
    }
}
