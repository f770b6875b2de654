//! Cryptographic primitives for Gliesereum wallets.
//!
//! - **secp256k1** key pairs, compressed SEC1 public keys
//! - **ECDSA** signing (RFC 6979, low-S), verification and key recovery
//! - **hash160** + one-byte checksum + base58 for addresses
//! - SHA-256 based 16-digit card numbers
//!
//! Every function takes the [`DerivationScheme`] explicitly; nothing here
//! holds state.
//!
//! [`DerivationScheme`]: gliesereum_types::DerivationScheme

pub mod address;
pub mod checksum;
pub mod hash;
pub mod keys;
pub mod number;
pub mod sign;

pub use address::{
    decode_address, derive_address, validate_address, AddressPayload, ADDRESS_SIZE,
    ADDRESS_VERSION,
};
pub use checksum::{compute_checksum, CHECKSUM_SIZE};
pub use hash::{hash160, ripemd160, sha256, sha256d};
pub use keys::{
    compress, generate_keypair, keypair_from_hex, keypair_from_private, parse_public_key,
    public_from_private,
};
pub use number::card_number;
pub use sign::{message_digest, recover_public_key, sign_message, verify_signature};
