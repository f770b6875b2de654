//! Wallet core library for Gliesereum.
//!
//! Provides everything a wallet application needs:
//! - Key generation and import (secp256k1)
//! - Address derivation and validation
//! - Card number derivation
//! - Message signing, verification and public-key recovery
//!
//! The whole surface is the [`WalletEngine`] trait, implemented by
//! [`Gliesereum`], which carries the [`DerivationScheme`] explicitly.
//!
//! [`DerivationScheme`]: gliesereum_types::DerivationScheme

pub mod config;
pub mod engine;
pub mod error;

pub use config::WalletConfig;
pub use engine::{Gliesereum, WalletEngine};
pub use error::WalletError;
