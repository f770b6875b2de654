use proptest::prelude::*;

use gliesereum_types::{CardNumber, DerivationScheme, PrivateKey, PublicKey, Signature};

proptest! {
    /// PrivateKey: full-width hex parses back to the same bytes.
    #[test]
    fn private_key_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hex_str = hex::encode(bytes);
        let key = PrivateKey::from_hex(&hex_str).unwrap();
        prop_assert_eq!(key.as_bytes(), &bytes);
        let rendered = key.to_hex();
        prop_assert_eq!(rendered.as_str(), hex_str.as_str());
    }

    /// PrivateKey: dropping leading zero digits does not change the scalar.
    #[test]
    fn private_key_unpadded_equals_padded(bytes in prop::array::uniform32(0u8..), strip in 0usize..8) {
        let mut bytes = bytes;
        for b in bytes.iter_mut().take(strip) {
            *b = 0;
        }
        let full = hex::encode(bytes);
        let trimmed = full.trim_start_matches('0');
        prop_assume!(!trimmed.is_empty());
        let a = PrivateKey::from_hex(&full).unwrap();
        let b = PrivateKey::from_hex(trimmed).unwrap();
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
    }

    /// PrivateKey: anything containing a non-hex character is rejected.
    #[test]
    fn private_key_rejects_non_hex(prefix in "[0-9a-f]{0,30}", bad in "[g-zG-Z]", suffix in "[0-9a-f]{0,30}") {
        let s = format!("{prefix}{bad}{suffix}");
        prop_assert!(PrivateKey::from_hex(&s).is_err());
    }

    /// PublicKey: only exactly 66 hex characters parse.
    #[test]
    fn public_key_length_enforced(len in 0usize..80) {
        let s = "a".repeat(len);
        prop_assert_eq!(PublicKey::from_hex(&s).is_ok(), len == 66);
    }

    /// Signature: JSON form preserves r, s and the recovery parameter.
    #[test]
    fn signature_json_preserves_fields(
        r in prop::array::uniform32(0u8..),
        s in prop::array::uniform32(0u8..),
        rec in prop::option::of(0u8..=3),
    ) {
        let sig = Signature { r, s, recovery_param: rec };
        let json = serde_json::to_string(&sig).unwrap();
        let back: Signature = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, sig);
    }

    /// CardNumber: range check agrees with manual bounds.
    #[test]
    fn card_number_range(value in 0u64..20_000_000_000_000_000) {
        let n = CardNumber::from_raw(value);
        prop_assert_eq!(
            n.is_in_range(),
            (1_000_000_000_000_000..=9_999_999_999_999_999).contains(&value)
        );
    }
}

#[test]
fn scheme_serializes_lowercase() {
    let json = serde_json::to_string(&DerivationScheme::Legacy).unwrap();
    assert_eq!(json, "\"legacy\"");
}
