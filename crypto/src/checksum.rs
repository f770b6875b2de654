//! Address checksum.
//!
//! The checksum is a single byte. A random single-character corruption of an
//! address therefore slips through with probability about 1/256. That is
//! weak, but changing it would invalidate every address already issued.

use gliesereum_types::DerivationScheme;

use crate::hash::{hash160, sha256d};

/// Number of checksum bytes appended to an address payload.
pub const CHECKSUM_SIZE: usize = 1;

/// Compute the checksum of an address payload (`version ‖ hash160`).
///
/// `Standard`: first `CHECKSUM_SIZE` bytes of `SHA256(SHA256(payload))`.
/// `Legacy`: first `CHECKSUM_SIZE` bytes of `hash160(hash160(payload))`.
pub fn compute_checksum(payload: &[u8], scheme: DerivationScheme) -> [u8; CHECKSUM_SIZE] {
    let mut checksum = [0u8; CHECKSUM_SIZE];
    match scheme {
        DerivationScheme::Standard => {
            checksum.copy_from_slice(&sha256d(payload)[..CHECKSUM_SIZE]);
        }
        DerivationScheme::Legacy => {
            let inner = hash160(payload, scheme);
            checksum.copy_from_slice(&hash160(&inner, scheme)[..CHECKSUM_SIZE]);
        }
    }
    checksum
}
