//! Card number: the 16-digit identifier derived from an address.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 16-digit decimal identifier derived deterministically from an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(u64);

impl CardNumber {
    /// Smallest card number (`10^15`).
    pub const MIN: u64 = 1_000_000_000_000_000;
    /// Size of the card number range (`9 * 10^15`).
    pub const SPAN: u64 = 9_000_000_000_000_000;
    /// Largest card number (`10^16 - 1`).
    pub const MAX: u64 = Self::MIN + Self::SPAN - 1;

    /// Wrap a raw value. No range check: values come from the derivation in
    /// `gliesereum_crypto`, which reduces into `MIN..=MAX`.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether the value lies in `MIN..=MAX` (exactly 16 decimal digits).
    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CardNumber> for u64 {
    fn from(n: CardNumber) -> Self {
        n.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_sixteen_digits() {
        assert_eq!(CardNumber::MIN.to_string().len(), 16);
        assert_eq!(CardNumber::MAX.to_string().len(), 16);
        assert_eq!(CardNumber::MAX, 9_999_999_999_999_999);
    }

    #[test]
    fn range_check() {
        assert!(CardNumber::from_raw(CardNumber::MIN).is_in_range());
        assert!(CardNumber::from_raw(CardNumber::MAX).is_in_range());
        assert!(!CardNumber::from_raw(CardNumber::MIN - 1).is_in_range());
        assert!(!CardNumber::from_raw(CardNumber::MAX + 1).is_in_range());
    }
}
