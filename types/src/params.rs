//! Derivation parameters.
//!
//! Two hash/arithmetic variants exist for turning keys into addresses and
//! addresses into card numbers:
//!
//! | Step | `Standard` | `Legacy` |
//! |---|---|---|
//! | hash160(x) | `RIPEMD160(SHA256(x))` | `RIPEMD160(hex(SHA256(utf8_lossy(x))))` |
//! | checksum(x) | `SHA256(SHA256(x))` | `hash160(hash160(x))` |
//! | card number | exact `u64` | IEEE-754 `f64` |
//! | signed message | `SHA256(data)` | hex-decoded `data` |
//!
//! `Legacy` reproduces the addresses issued by the first JavaScript wallet
//! bit for bit, quirks included. Everything new should use `Standard`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GliesereumError;

/// Selects the derivation variant used by an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationScheme {
    #[default]
    Standard,
    Legacy,
}

impl DerivationScheme {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for DerivationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DerivationScheme {
    type Err = GliesereumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            other => Err(GliesereumError::UnknownScheme(other.to_string())),
        }
    }
}
