use thiserror::Error;

use crate::binary::EntropyError;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Salt generation failed: {0}")]
    SaltGenerationFailed(#[from] EntropyError),
}
