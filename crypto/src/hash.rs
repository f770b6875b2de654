//! SHA-256, RIPEMD-160 and the hash160 construction used for addresses.

use gliesereum_types::DerivationScheme;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of a hash160 digest.
pub const HASH160_SIZE: usize = 20;

/// Compute the SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute the RIPEMD-160 digest of arbitrary data.
pub fn ripemd160(data: &[u8]) -> [u8; HASH160_SIZE] {
    let mut output = [0u8; HASH160_SIZE];
    output.copy_from_slice(&Ripemd160::digest(data));
    output
}

/// Shorten data (normally a compressed public key) to 20 bytes.
///
/// `Standard` is `RIPEMD160(SHA256(data))`. `Legacy` reads `data` as UTF-8
/// (ill-formed sequences become U+FFFD), hashes that text with SHA-256, and
/// feeds the lowercase hex *text* of the digest to RIPEMD-160.
pub fn hash160(data: &[u8], scheme: DerivationScheme) -> [u8; HASH160_SIZE] {
    match scheme {
        DerivationScheme::Standard => ripemd160(&sha256(data)),
        DerivationScheme::Legacy => {
            let text = String::from_utf8_lossy(data);
            let digest_hex = hex::encode(sha256(text.as_bytes()));
            ripemd160(digest_hex.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256d_known_vector() {
        assert_eq!(
            hex::encode(sha256d(b"abc")),
            "4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358"
        );
    }

    #[test]
    fn ripemd160_empty() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
    }

    #[test]
    fn standard_hash160_of_generator() {
        let g = hex::decode(G_COMPRESSED).unwrap();
        assert_eq!(
            hex::encode(hash160(&g, DerivationScheme::Standard)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn legacy_hash160_of_generator() {
        let g = hex::decode(G_COMPRESSED).unwrap();
        assert_eq!(
            hex::encode(hash160(&g, DerivationScheme::Legacy)),
            "fc145087066336a2d66d44665055a37c63fdab02"
        );
    }

    #[test]
    fn legacy_hash160_replaces_invalid_utf8() {
        // A lone 0xFF byte decodes to U+FFFD, so both inputs hash alike.
        assert_eq!(
            hash160(&[0xFF], DerivationScheme::Legacy),
            hash160("\u{FFFD}".as_bytes(), DerivationScheme::Legacy)
        );
        assert_eq!(
            hex::encode(hash160(&[0xFF], DerivationScheme::Legacy)),
            "e49082a79662d2670fa7d088e359ac17be610325"
        );
    }

    #[test]
    fn schemes_differ() {
        let data = b"abc";
        assert_ne!(
            hash160(data, DerivationScheme::Standard),
            hash160(data, DerivationScheme::Legacy)
        );
    }
}
