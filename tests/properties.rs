//! Property tests for the byte-level encodings and the configuration gate.

use acvp_kda::fixed_info::assemble;
use acvp_kda::{KdaConfiguration, KdaError, PartyInfo};
use proptest::prelude::*;

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..64)
}

proptest! {
    #[test]
    fn party_info_is_id_then_aux(id in bytes(), aux in proptest::option::of(bytes())) {
        let party = PartyInfo {
            id_hex: hex::encode(&id),
            ephemeral_hex: aux.as_ref().map(hex::encode),
        };

        let mut expected = id.clone();
        if let Some(aux) = &aux {
            expected.extend_from_slice(aux);
        }
        prop_assert_eq!(party.encode().unwrap(), expected);
    }

    #[test]
    fn uppercase_hex_decodes_the_same(id in bytes()) {
        let lower = PartyInfo { id_hex: hex::encode(&id), ephemeral_hex: None };
        let upper = PartyInfo { id_hex: hex::encode_upper(&id), ephemeral_hex: None };
        prop_assert_eq!(lower.encode().unwrap(), upper.encode().unwrap());
    }

    #[test]
    fn info_is_u_v_then_be32(u in bytes(), v in bytes(), l in any::<u32>()) {
        let info = assemble(&u, &v, l);

        prop_assert_eq!(info.len(), u.len() + v.len() + 4);
        prop_assert_eq!(&info[..u.len()], &u[..]);
        prop_assert_eq!(&info[u.len()..u.len() + v.len()], &v[..]);
        prop_assert_eq!(&info[u.len() + v.len()..], &l.to_be_bytes()[..]);
        prop_assert_eq!(info[u.len() + v.len()], (l >> 24) as u8);
    }

    #[test]
    fn config_gate(
        kdf_type in prop::sample::select(vec!["hkdf", "oneStep", "twoStep"]),
        salt_method in prop::sample::select(vec!["default", "random", "none"]),
        pattern in prop::sample::select(vec![
            "uPartyInfo||vPartyInfo",
            "literal[0102]||uPartyInfo||vPartyInfo",
            "vPartyInfo||uPartyInfo",
            "uPartyInfo",
        ]),
        encoding in prop::sample::select(vec!["concatenation", "lengthPrefixed"]),
        bits in 0u32..4096,
    ) {
        let cfg = KdaConfiguration {
            kdf_type: kdf_type.into(),
            salt_method: salt_method.into(),
            salt_len: 0,
            fixed_info_pattern: pattern.into(),
            fixed_info_encoding: encoding.into(),
            hmac_alg: "SHA2-512".into(),
            output_bits: bits,
        };

        let accept = kdf_type == "hkdf"
            && salt_method != "none"
            && pattern.contains("uPartyInfo||vPartyInfo")
            && encoding == "concatenation"
            && bits % 8 == 0;

        match cfg.extract() {
            Ok(params) => {
                prop_assert!(accept);
                prop_assert_eq!(params.output_bytes, bits / 8);
                prop_assert_eq!(params.hash_name, "SHA2-512");
            }
            Err(e) => {
                prop_assert!(!accept);
                prop_assert_eq!(e, KdaError::UnsupportedConfiguration);
            }
        }
    }
}
