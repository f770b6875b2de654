//! secp256k1 key and signature types.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::GliesereumError;

/// Length of a SEC1 compressed public key: parity prefix + 32-byte x-coordinate.
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Length of a secp256k1 secret scalar.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// A 33-byte SEC1 compressed secp256k1 public key.
///
/// This type only guarantees the byte length. Whether the bytes name a point
/// on the curve is checked by `gliesereum_crypto` when the key is used.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering (66 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 66-character hex string into a compressed key.
    pub fn from_hex(s: &str) -> Result<Self, GliesereumError> {
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| {
            GliesereumError::InvalidPublicKey(format!("expected 33 hex-encoded bytes: {e}"))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A 32-byte secp256k1 secret scalar, big-endian.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }

    /// Zero-padded lowercase hex rendering (64 characters).
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }

    /// Parse a big-endian hex scalar.
    ///
    /// Accepts 1 to 64 hex digits in either case; shorter inputs (including
    /// odd lengths) are left-padded with zeros. Range checking against the
    /// curve order happens in `gliesereum_crypto`.
    pub fn from_hex(s: &str) -> Result<Self, GliesereumError> {
        if s.is_empty() {
            return Err(GliesereumError::InvalidScalar("empty private key".into()));
        }
        let bytes = parse_padded_hex::<PRIVATE_KEY_SIZE>(s).ok_or_else(|| {
            GliesereumError::InvalidScalar("private key must be at most 64 hex digits".into())
        })?;
        Ok(Self(*bytes))
    }
}

/// A secp256k1 key pair (public + private).
///
/// Use `gliesereum_crypto::generate_keypair()` or
/// `gliesereum_crypto::keypair_from_private()` to construct key pairs; those
/// guarantee `public == private · G`. This struct is intentionally just data.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// Decode up to `2 * N` hex digits into a big-endian `[u8; N]`, left-padding
/// with zeros. Returns `None` on non-hex input or overlong input.
pub(crate) fn parse_padded_hex<const N: usize>(s: &str) -> Option<Zeroizing<[u8; N]>> {
    if s.len() > N * 2 {
        return None;
    }
    let padded = Zeroizing::new(format!("{:0>width$}", s, width = N * 2));
    let mut out = Zeroizing::new([0u8; N]);
    hex::decode_to_slice(padded.as_bytes(), &mut out[..]).ok()?;
    Some(out)
}

/// An ECDSA signature over secp256k1.
///
/// `r` and `s` are big-endian 32-byte integers. `recovery_param` is the
/// index (0..=3) of the candidate point from which the signer's public key
/// can be recovered; signatures produced outside this crate may omit it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignatureRepr", into = "SignatureRepr")]
pub struct Signature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub recovery_param: Option<u8>,
}

impl Signature {
    /// Highest valid recovery parameter.
    pub const MAX_RECOVERY_PARAM: u8 = 3;

    /// Build a signature from hex-encoded `r` and `s`.
    ///
    /// Components may be shorter than 64 digits (leading zeros dropped), as
    /// produced by big-number libraries that render without padding.
    pub fn from_hex_parts(
        r: &str,
        s: &str,
        recovery_param: Option<u8>,
    ) -> Result<Self, GliesereumError> {
        let parse = |name: &str, v: &str| {
            parse_padded_hex::<32>(v)
                .map(|b| *b)
                .ok_or_else(|| GliesereumError::Decoding(format!("signature {name} is not valid hex")))
        };
        if let Some(param) = recovery_param {
            if param > Self::MAX_RECOVERY_PARAM {
                return Err(GliesereumError::InvalidSignature(format!(
                    "recovery parameter {param} out of range"
                )));
            }
        }
        Ok(Self {
            r: parse("r", r)?,
            s: parse("s", s)?,
            recovery_param,
        })
    }

    /// The 64-byte `r ‖ s` encoding.
    pub fn to_compact(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    pub fn r_hex(&self) -> String {
        hex::encode(self.r)
    }

    pub fn s_hex(&self) -> String {
        hex::encode(self.s)
    }
}

/// Wire form: `{ "r": hex, "s": hex, "recovery_param": int | null }`.
#[derive(Serialize, Deserialize)]
struct SignatureRepr {
    r: String,
    s: String,
    #[serde(default)]
    recovery_param: Option<u8>,
}

impl From<Signature> for SignatureRepr {
    fn from(sig: Signature) -> Self {
        Self {
            r: sig.r_hex(),
            s: sig.s_hex(),
            recovery_param: sig.recovery_param,
        }
    }
}

impl TryFrom<SignatureRepr> for Signature {
    type Error = GliesereumError;

    fn try_from(repr: SignatureRepr) -> Result<Self, Self::Error> {
        Signature::from_hex_parts(&repr.r, &repr.s, repr.recovery_param)
    }
}
