use gliesereum_types::GliesereumError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Crypto(#[from] GliesereumError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl WalletError {
    /// Whether this error means the supplied private key was unusable.
    pub fn is_invalid_scalar(&self) -> bool {
        matches!(self, Self::Crypto(GliesereumError::InvalidScalar(_)))
    }
}
