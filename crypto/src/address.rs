//! Wallet address derivation from public keys.
//!
//! Address format: base58(version ‖ hash160(public_key) ‖ checksum)
//!
//! - version: one byte, always `0x90` for wallet addresses.
//! - hash160: 20 bytes, see [`crate::hash::hash160`].
//! - checksum: [`CHECKSUM_SIZE`] byte(s), see [`crate::checksum`].
//!
//! 22 bytes before encoding, Bitcoin base58 alphabet, no padding.

use gliesereum_types::{DerivationScheme, PublicKey, WalletAddress};

use crate::checksum::{compute_checksum, CHECKSUM_SIZE};
use crate::hash::{hash160, HASH160_SIZE};

/// Version byte distinguishing the wallet address namespace.
pub const ADDRESS_VERSION: u8 = 0x90;
/// `version ‖ hash160`.
pub const PAYLOAD_SIZE: usize = 1 + HASH160_SIZE;
/// Total decoded address length.
pub const ADDRESS_SIZE: usize = PAYLOAD_SIZE + CHECKSUM_SIZE;

/// The decoded contents of a well-formed address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressPayload {
    pub version: u8,
    pub hash160: [u8; HASH160_SIZE],
}

/// Derive a wallet address from a compressed public key.
///
/// Process:
/// 1. h160 = hash160(public_key)
/// 2. payload = 0x90 ‖ h160
/// 3. checksum = compute_checksum(payload)
/// 4. address = base58(payload ‖ checksum)
pub fn derive_address(public_key: &PublicKey, scheme: DerivationScheme) -> WalletAddress {
    let h160 = hash160(public_key.as_bytes(), scheme);

    let mut full = [0u8; ADDRESS_SIZE];
    full[0] = ADDRESS_VERSION;
    full[1..PAYLOAD_SIZE].copy_from_slice(&h160);
    let checksum = compute_checksum(&full[..PAYLOAD_SIZE], scheme);
    full[PAYLOAD_SIZE..].copy_from_slice(&checksum);

    WalletAddress::new(bs58::encode(full).into_string())
}

/// Validate that an address decodes and carries a matching checksum.
///
/// Everything before the trailing checksum is hashed as-is; the version byte
/// and the length are deliberately not checked against [`ADDRESS_VERSION`]
/// or [`ADDRESS_SIZE`], so any payload the checksum covers is accepted.
/// Never fails: malformed input is just `false`.
pub fn validate_address(address: &str, scheme: DerivationScheme) -> bool {
    let Ok(decoded) = bs58::decode(address).into_vec() else {
        return false;
    };
    // A lone checksum byte with an empty body is rejected even when it
    // equals the checksum of the empty payload.
    if decoded.len() <= CHECKSUM_SIZE {
        return false;
    }
    let (body, actual) = decoded.split_at(decoded.len() - CHECKSUM_SIZE);
    compute_checksum(body, scheme) == actual
}

/// Extract version and hash160 from an address.
///
/// Stricter than [`validate_address`]: the decoded length must be exactly
/// [`ADDRESS_SIZE`]. Returns `None` if the address is malformed or has an
/// invalid checksum.
pub fn decode_address(address: &str, scheme: DerivationScheme) -> Option<AddressPayload> {
    let decoded = bs58::decode(address).into_vec().ok()?;
    if decoded.len() != ADDRESS_SIZE {
        return None;
    }
    let (body, actual) = decoded.split_at(PAYLOAD_SIZE);
    if compute_checksum(body, scheme) != actual {
        return None;
    }
    let mut h160 = [0u8; HASH160_SIZE];
    h160.copy_from_slice(&body[1..]);
    Some(AddressPayload {
        version: body[0],
        hash160: h160,
    })
}
