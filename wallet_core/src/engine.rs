//! The wallet engine: one value carrying the derivation context, exposing
//! every wallet operation.

use gliesereum_crypto as crypto;
use gliesereum_crypto::AddressPayload;
use gliesereum_types::{
    CardNumber, DerivationScheme, KeyPair, PublicKey, Signature, Wallet, WalletAddress,
};
use tracing::debug;

use crate::config::WalletConfig;
use crate::error::WalletError;

/// The flat wallet API.
///
/// Everything is synchronous and side-effect free apart from entropy use in
/// [`generate`](WalletEngine::generate). Implementations must be usable from
/// several threads at once.
pub trait WalletEngine: Send + Sync {
    /// Create a wallet from a fresh random scalar.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source fails.
    fn generate(&self) -> Wallet;

    /// Rebuild a wallet from a hex private key.
    ///
    /// Fails if the hex is malformed, zero, or not below the curve order.
    fn import_from_private_key(&self, private_key_hex: &str) -> Result<Wallet, WalletError>;

    /// Sign `data` with a hex private key.
    fn sign(&self, data: &str, private_key_hex: &str) -> Result<Signature, WalletError>;

    /// Check a signature against a hex SEC1 public key.
    ///
    /// `Ok(false)` for any mismatch; `Err` only for a malformed key.
    fn verify(
        &self,
        data: &str,
        signature: &Signature,
        public_key_hex: &str,
    ) -> Result<bool, WalletError>;

    /// Recover the signer's public key, or `None` if the signature carries no
    /// recovery parameter or recovery fails for any reason.
    fn recover(&self, data: &str, signature: &Signature) -> Option<PublicKey>;

    /// Whether `address` decodes and its checksum matches. Never fails.
    fn validate_address(&self, address: &str) -> bool;

    /// The card number for `address`.
    ///
    /// Always 16 digits under [`DerivationScheme::Standard`]. Under
    /// [`DerivationScheme::Legacy`] the `f64` rounding can yield `10^16`,
    /// which [`CardNumber::is_in_range`] rejects.
    fn card_number(&self, address: &str) -> CardNumber;
}

/// Default [`WalletEngine`] implementation.
///
/// Holds the derivation scheme explicitly instead of relying on a global
/// curve context; construct one per configuration and pass it around.
/// `Copy`, stateless and `Send + Sync`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gliesereum {
    scheme: DerivationScheme,
}

impl Gliesereum {
    pub fn new(scheme: DerivationScheme) -> Self {
        Self { scheme }
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(config.scheme)
    }

    pub fn scheme(&self) -> DerivationScheme {
        self.scheme
    }

    /// Address of a compressed public key under this engine's scheme.
    pub fn address_for(&self, public_key: &PublicKey) -> WalletAddress {
        crypto::derive_address(public_key, self.scheme)
    }

    /// Version byte and hash160 of a well-formed 22-byte address.
    pub fn decode_address(&self, address: &str) -> Option<AddressPayload> {
        crypto::decode_address(address, self.scheme)
    }

    /// Build the wallet record for a key pair: address from the public key,
    /// card number from the address.
    fn assemble(&self, keypair: KeyPair) -> Wallet {
        let address = self.address_for(&keypair.public);
        let number = crypto::card_number(address.as_str(), self.scheme);
        Wallet::new(keypair.public, keypair.private, address, number)
    }
}

impl WalletEngine for Gliesereum {
    fn generate(&self) -> Wallet {
        let wallet = self.assemble(crypto::generate_keypair());
        debug!(
            address = %wallet.address(),
            scheme = %self.scheme,
            "generated wallet"
        );
        wallet
    }

    fn import_from_private_key(&self, private_key_hex: &str) -> Result<Wallet, WalletError> {
        let keypair = crypto::keypair_from_hex(private_key_hex)?;
        let wallet = self.assemble(keypair);
        debug!(
            address = %wallet.address(),
            scheme = %self.scheme,
            "imported wallet"
        );
        Ok(wallet)
    }

    fn sign(&self, data: &str, private_key_hex: &str) -> Result<Signature, WalletError> {
        let keypair = crypto::keypair_from_hex(private_key_hex)?;
        let signature = crypto::sign_message(data, &keypair.private, self.scheme)?;
        debug!(public_key = %keypair.public, scheme = %self.scheme, "signed message");
        Ok(signature)
    }

    fn verify(
        &self,
        data: &str,
        signature: &Signature,
        public_key_hex: &str,
    ) -> Result<bool, WalletError> {
        let valid = crypto::verify_signature(data, signature, public_key_hex, self.scheme)?;
        debug!(valid, scheme = %self.scheme, "verified signature");
        Ok(valid)
    }

    fn recover(&self, data: &str, signature: &Signature) -> Option<PublicKey> {
        match crypto::recover_public_key(data, signature, self.scheme) {
            Ok(public_key) => Some(public_key),
            Err(e) => {
                debug!(error = %e, scheme = %self.scheme, "failed to recover public key");
                None
            }
        }
    }

    fn validate_address(&self, address: &str) -> bool {
        crypto::validate_address(address, self.scheme)
    }

    fn card_number(&self, address: &str) -> CardNumber {
        crypto::card_number(address, self.scheme)
    }
}
