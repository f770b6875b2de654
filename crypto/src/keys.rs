//! secp256k1 key generation and import.

use gliesereum_types::{GliesereumError, KeyPair, PrivateKey, PublicKey, PUBLIC_KEY_SIZE};
use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;

/// Generate a new key pair from the operating system's secure random source.
///
/// The scalar is drawn uniformly from `[1, n-1]` by rejection sampling.
///
/// # Panics
///
/// Panics if the OS entropy source fails; there is no meaningful recovery.
pub fn generate_keypair() -> KeyPair {
    let signing_key = SigningKey::random(&mut OsRng);
    keypair_from_signing_key(&signing_key)
}

/// Derive the compressed public key for a private key.
///
/// Fails with `InvalidScalar` if the key is zero or not below the curve order.
pub fn public_from_private(private: &PrivateKey) -> Result<PublicKey, GliesereumError> {
    let signing_key = signing_key(private)?;
    Ok(compress(signing_key.verifying_key()))
}

/// Reconstruct a full key pair from a private key.
pub fn keypair_from_private(private: PrivateKey) -> Result<KeyPair, GliesereumError> {
    let public = public_from_private(&private)?;
    Ok(KeyPair { public, private })
}

/// Parse a big-endian hex scalar and derive its key pair.
pub fn keypair_from_hex(private_hex: &str) -> Result<KeyPair, GliesereumError> {
    keypair_from_private(PrivateKey::from_hex(private_hex)?)
}

/// Parse a SEC1 public key (compressed or uncompressed) from hex.
pub fn parse_public_key(public_hex: &str) -> Result<VerifyingKey, GliesereumError> {
    let bytes = hex::decode(public_hex)
        .map_err(|e| GliesereumError::InvalidPublicKey(format!("not valid hex: {e}")))?;
    VerifyingKey::from_sec1_bytes(&bytes)
        .map_err(|_| GliesereumError::InvalidPublicKey("not a point on secp256k1".into()))
}

/// Compressed SEC1 encoding of a verifying key.
pub fn compress(verifying_key: &VerifyingKey) -> PublicKey {
    let point = verifying_key.to_encoded_point(true);
    let mut out = [0u8; PUBLIC_KEY_SIZE];
    out.copy_from_slice(point.as_bytes());
    PublicKey(out)
}

pub(crate) fn signing_key(private: &PrivateKey) -> Result<SigningKey, GliesereumError> {
    SigningKey::from_slice(private.as_bytes()).map_err(|_| {
        GliesereumError::InvalidScalar("scalar must be in [1, n-1] for secp256k1".into())
    })
}

fn keypair_from_signing_key(signing_key: &SigningKey) -> KeyPair {
    let mut private = PrivateKey([0u8; 32]);
    private.0.copy_from_slice(&signing_key.to_bytes());
    KeyPair {
        public: compress(signing_key.verifying_key()),
        private,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// secp256k1 group order n.
    const ORDER_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    #[test]
    fn scalar_one_yields_generator() {
        let kp = keypair_from_hex("0000000000000000000000000000000000000000000000000000000000000001")
            .unwrap();
        assert_eq!(
            kp.public.to_hex(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn scalar_two_yields_double_generator() {
        let kp = keypair_from_hex("2").unwrap();
        assert_eq!(
            kp.public.to_hex(),
            "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
        );
    }

    #[test]
    fn generate_produces_valid_keypair() {
        let kp = generate_keypair();
        assert_ne!(kp.private.0, [0u8; 32]);
        assert!(kp.public.0[0] == 0x02 || kp.public.0[0] == 0x03);
    }

    #[test]
    fn public_from_private_is_deterministic() {
        let kp = generate_keypair();
        let pub2 = public_from_private(&kp.private).unwrap();
        assert_eq!(kp.public, pub2);
    }

    #[test]
    fn zero_scalar_rejected() {
        assert!(matches!(
            keypair_from_hex("0"),
            Err(GliesereumError::InvalidScalar(_))
        ));
    }

    #[test]
    fn order_and_above_rejected() {
        assert!(matches!(
            keypair_from_hex(ORDER_HEX),
            Err(GliesereumError::InvalidScalar(_))
        ));
        assert!(matches!(
            keypair_from_hex(&"f".repeat(64)),
            Err(GliesereumError::InvalidScalar(_))
        ));
    }

    #[test]
    fn order_minus_one_accepted() {
        let n_minus_one = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140";
        let kp = keypair_from_hex(n_minus_one).unwrap();
        // (n-1)·G = -G: same x-coordinate as G, odd y.
        assert_eq!(
            kp.public.to_hex(),
            "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn parse_public_key_accepts_both_encodings() {
        let compressed = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
        let uncompressed = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                            483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
        let a = parse_public_key(compressed).unwrap();
        let b = parse_public_key(uncompressed).unwrap();
        assert_eq!(compress(&a), compress(&b));
    }

    #[test]
    fn parse_public_key_rejects_garbage() {
        assert!(matches!(
            parse_public_key("not hex"),
            Err(GliesereumError::InvalidPublicKey(_))
        ));
        assert!(matches!(
            parse_public_key(&format!("02{}", "00".repeat(32))),
            Err(GliesereumError::InvalidPublicKey(_))
        ));
    }
}
