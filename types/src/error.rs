//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the Gliesereum wallet engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GliesereumError {
    /// Private key is not valid hex, is zero, or is not below the curve order.
    #[error("invalid private key scalar: {0}")]
    InvalidScalar(String),

    /// Hex or base58 input could not be decoded.
    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Public-key recovery from a signature failed.
    #[error("public key recovery failed: {0}")]
    Recovery(String),

    #[error("unknown derivation scheme: {0}")]
    UnknownScheme(String),
}
