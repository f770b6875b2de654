//! Fundamental types for the Gliesereum wallet engine.
//!
//! This crate defines the data shared across every other crate in the
//! workspace: keys, signatures, addresses, card numbers, the wallet record,
//! the derivation scheme selector and the common error type.

pub mod address;
pub mod error;
pub mod keys;
pub mod number;
pub mod params;
pub mod wallet;

pub use address::WalletAddress;
pub use error::GliesereumError;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
pub use number::CardNumber;
pub use params::DerivationScheme;
pub use wallet::{Wallet, WalletExport};
