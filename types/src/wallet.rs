//! The wallet value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CardNumber, PrivateKey, PublicKey, WalletAddress};

/// A key pair together with its derived address and card number.
///
/// Immutable once built. Any change (a different key) means a new wallet.
/// Construct through `gliesereum_wallet_core::WalletEngine`, which keeps the
/// four fields consistent; this struct is just data.
pub struct Wallet {
    public_key: PublicKey,
    private_key: PrivateKey,
    address: WalletAddress,
    number: CardNumber,
}

impl Wallet {
    pub fn new(
        public_key: PublicKey,
        private_key: PrivateKey,
        address: WalletAddress,
        number: CardNumber,
    ) -> Self {
        Self {
            public_key,
            private_key,
            address,
            number,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn address(&self) -> &WalletAddress {
        &self.address
    }

    pub fn number(&self) -> CardNumber {
        self.number
    }

    /// Compressed public key as 66 hex characters.
    pub fn public_key_hex(&self) -> String {
        self.public_key.to_hex()
    }

    /// Private scalar as 64 hex characters.
    pub fn private_key_hex(&self) -> zeroize::Zeroizing<String> {
        self.private_key.to_hex()
    }

    /// Flatten into a serializable record.
    ///
    /// The export carries the private key in clear text. It exists for
    /// handing a freshly created wallet to its owner and must not be logged.
    pub fn export(&self) -> WalletExport {
        WalletExport {
            public_key: self.public_key_hex(),
            private_key: self.private_key_hex().to_string(),
            address: self.address.as_str().to_string(),
            number: self.number.get(),
        }
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .field("number", &self.number)
            .finish()
    }
}

/// Plain-data form of a [`Wallet`] with every field hex or decimal encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletExport {
    pub public_key: String,
    pub private_key: String,
    pub address: String,
    pub number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Wallet {
        Wallet::new(
            PublicKey([2u8; 33]),
            PrivateKey([7u8; 32]),
            WalletAddress::new("gSample"),
            CardNumber::from_raw(1_234_567_890_123_456),
        )
    }

    #[test]
    fn debug_redacts_private_key() {
        let rendered = format!("{:?}", sample());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(&"07".repeat(32)));
    }

    #[test]
    fn export_has_hex_fields() {
        let export = sample().export();
        assert_eq!(export.public_key, "02".repeat(33));
        assert_eq!(export.private_key, "07".repeat(32));
        assert_eq!(export.address, "gSample");
        assert_eq!(export.number, 1_234_567_890_123_456);
    }
}
