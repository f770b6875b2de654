use proptest::prelude::*;

use gliesereum_crypto::derive_address;
use gliesereum_types::DerivationScheme;
use gliesereum_wallet_core::{Gliesereum, WalletEngine};

fn scheme_strategy() -> impl Strategy<Value = DerivationScheme> {
    prop_oneof![Just(DerivationScheme::Standard), Just(DerivationScheme::Legacy)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Import consistency: importing a scalar yields the address derived
    /// directly from its public key, and a card number in range.
    #[test]
    fn import_matches_direct_derivation(
        bytes in prop::array::uniform32(0u8..),
        scheme in scheme_strategy(),
    ) {
        let engine = Gliesereum::new(scheme);
        let hex_key = hex::encode(bytes);
        // Zero or >= n: the only rejections allowed.
        let Ok(wallet) = engine.import_from_private_key(&hex_key) else {
            return Ok(());
        };
        prop_assert_eq!(wallet.address(), &derive_address(wallet.public_key(), scheme));
        prop_assert_eq!(wallet.number(), engine.card_number(wallet.address().as_str()));
        prop_assert!(wallet.number().is_in_range());
        prop_assert!(engine.validate_address(wallet.address().as_str()));
        let private_hex = wallet.private_key_hex();
        prop_assert_eq!(private_hex.as_str(), hex_key.as_str());
    }

    /// Signature round-trip and recovery for arbitrary text.
    #[test]
    fn sign_verify_recover(data in ".{0,64}", bytes in prop::array::uniform32(1u8..)) {
        let engine = Gliesereum::new(DerivationScheme::Standard);
        let Ok(wallet) = engine.import_from_private_key(&hex::encode(bytes)) else {
            return Ok(());
        };
        let sig = engine.sign(&data, &wallet.private_key_hex()).unwrap();
        prop_assert!(engine.verify(&data, &sig, &wallet.public_key_hex()).unwrap());
        let recovered = engine.recover(&data, &sig);
        prop_assert_eq!(recovered.as_ref(), Some(wallet.public_key()));
    }

    /// Validation never panics on arbitrary input.
    #[test]
    fn validate_never_panics(input in ".{0,48}", scheme in scheme_strategy()) {
        let _ = Gliesereum::new(scheme).validate_address(&input);
    }

    /// Card numbers are always 16 digits under the exact scheme.
    #[test]
    fn card_number_in_range(input in ".{1,64}") {
        let n = Gliesereum::new(DerivationScheme::Standard).card_number(&input);
        prop_assert_eq!(n.to_string().len(), 16);
    }
}
