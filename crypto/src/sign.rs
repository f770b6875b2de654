//! ECDSA signing, verification and public-key recovery over secp256k1.
//!
//! Signatures are deterministic (RFC 6979 nonces) and always low-S. The
//! recovery parameter is adjusted whenever S is normalised, so it stays
//! consistent with the returned signature.

use gliesereum_types::{DerivationScheme, GliesereumError, PrivateKey, PublicKey, Signature};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};

use crate::hash::sha256;
use crate::keys::{compress, parse_public_key, signing_key};

/// Reduce the caller's data to the 32-byte digest that is actually signed.
///
/// `Standard`: `SHA256(data)`.
///
/// `Legacy`: `data` is already the hex rendering of a digest. It is decoded
/// as a big-endian integer (odd length allowed), and if wider than 256 bits
/// only the leftmost 256 significant bits are kept.
pub fn message_digest(data: &str, scheme: DerivationScheme) -> Result<[u8; 32], GliesereumError> {
    match scheme {
        DerivationScheme::Standard => Ok(sha256(data.as_bytes())),
        DerivationScheme::Legacy => legacy_digest(data),
    }
}

fn legacy_digest(data: &str) -> Result<[u8; 32], GliesereumError> {
    let padded;
    let even = if data.len() % 2 == 1 {
        padded = format!("0{data}");
        padded.as_str()
    } else {
        data
    };
    let bytes = hex::decode(even)
        .map_err(|e| GliesereumError::Decoding(format!("legacy message is not hex: {e}")))?;

    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    let kept = &significant[..significant.len().min(32)];

    let mut digest = [0u8; 32];
    digest[32 - kept.len()..].copy_from_slice(kept);
    Ok(digest)
}

/// Sign `data` with a private key.
///
/// Fails if the key is not a valid scalar or, under `Legacy`, if `data` is
/// not hex.
pub fn sign_message(
    data: &str,
    private_key: &PrivateKey,
    scheme: DerivationScheme,
) -> Result<Signature, GliesereumError> {
    let key = signing_key(private_key)?;
    let digest = message_digest(data, scheme)?;
    let (sig, recid) = key
        .sign_prehash_recoverable(&digest)
        .map_err(|e| GliesereumError::InvalidSignature(format!("signing failed: {e}")))?;
    Ok(from_ecdsa(&sig, Some(recid)))
}

/// Verify a signature against `data` and a hex-encoded SEC1 public key.
///
/// Returns `Ok(false)` for any signature that does not verify, including
/// ones whose `r` or `s` is zero or not below the curve order. High-S
/// signatures are accepted. Errors only for a malformed public key or, under
/// `Legacy`, non-hex `data`.
pub fn verify_signature(
    data: &str,
    signature: &Signature,
    public_key_hex: &str,
    scheme: DerivationScheme,
) -> Result<bool, GliesereumError> {
    let verifying_key = parse_public_key(public_key_hex)?;
    let digest = message_digest(data, scheme)?;
    let Ok(sig) = to_ecdsa(signature) else {
        return Ok(false);
    };
    let sig = sig.normalize_s().unwrap_or(sig);
    Ok(verifying_key.verify_prehash(&digest, &sig).is_ok())
}

/// Recover the signer's compressed public key from a signature.
///
/// Requires the signature's recovery parameter.
pub fn recover_public_key(
    data: &str,
    signature: &Signature,
    scheme: DerivationScheme,
) -> Result<PublicKey, GliesereumError> {
    let param = signature
        .recovery_param
        .ok_or_else(|| GliesereumError::Recovery("signature has no recovery parameter".into()))?;
    let recid = RecoveryId::from_byte(param)
        .ok_or_else(|| GliesereumError::Recovery(format!("recovery parameter {param} out of range")))?;
    let digest = message_digest(data, scheme)?;
    let sig = to_ecdsa(signature)?;

    // Flipping S to the low half mirrors R, which flips the parity bit.
    let (sig, recid) = match sig.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
        ),
        None => (sig, recid),
    };

    let verifying_key = VerifyingKey::recover_from_prehash(&digest, &sig, recid)
        .map_err(|e| GliesereumError::Recovery(e.to_string()))?;
    Ok(compress(&verifying_key))
}

fn to_ecdsa(signature: &Signature) -> Result<EcdsaSignature, GliesereumError> {
    EcdsaSignature::from_slice(&signature.to_compact())
        .map_err(|_| GliesereumError::InvalidSignature("r and s must be in [1, n-1]".into()))
}

fn from_ecdsa(sig: &EcdsaSignature, recid: Option<RecoveryId>) -> Signature {
    let compact = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);
    Signature {
        r,
        s,
        recovery_param: recid.map(|id| id.to_byte()),
    }
}
