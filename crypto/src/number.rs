//! Card number derivation: address → 16-digit identifier.

use gliesereum_types::{CardNumber, DerivationScheme};

use crate::hash::sha256;

/// Map a string (normally an address) to a 16-digit card number.
///
/// `v` is the first 16 hex digits of `SHA256(input)` read as a base-16
/// integer, i.e. the first 8 digest bytes big-endian. The result is
/// `10^15 + (v mod 9·10^15)`.
///
/// `Legacy` performs the last two steps in `f64`, as the original
/// JavaScript did. `v` is rounded to 53 bits first, and the final sum
/// rounds to an even integer above 2^53 (it can even reach `10^16`).
pub fn card_number(input: &str, scheme: DerivationScheme) -> CardNumber {
    let digest = sha256(input.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let v = u64::from_be_bytes(head);

    match scheme {
        DerivationScheme::Standard => CardNumber::from_raw(CardNumber::MIN + v % CardNumber::SPAN),
        DerivationScheme::Legacy => {
            let min = CardNumber::MIN as f64;
            let span = CardNumber::SPAN as f64;
            CardNumber::from_raw((min + (v as f64) % span) as u64)
        }
    }
}
