//! Wire format: ACVP KDA HKDF vector sets and responses (JSON)
//!
//! Request:
//!   { "testGroups": [ { "tgId", "testType", "kdfConfiguration", "tests": [ ... ] } ], "mode" }
//!
//! Response:
//!   [ { "tgId", "tests": [ { "tcId", "dkm" | "testPassed" } ] } ]
//!
//! Field names are fixed by the ACVP KAS-KDF HKDF draft. Hex fields stay as
//! strings here and are decoded by the stage that consumes them.

use serde::{Deserialize, Serialize};

use crate::error::KdaError;

/// Top-level vector set.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSet {
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub id: u64,
    /// `AFT` or `VAL`; classified by the processor.
    #[serde(rename = "testType")]
    pub test_type: String,
    #[serde(rename = "kdfConfiguration")]
    pub config: KdaConfiguration,
    pub tests: Vec<Test>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KdaConfiguration {
    #[serde(rename = "kdfType")]
    pub kdf_type: String,
    #[serde(rename = "saltMethod")]
    pub salt_method: String,
    #[serde(rename = "saltLen", default)]
    pub salt_len: u64,
    #[serde(rename = "fixedInfoPattern")]
    pub fixed_info_pattern: String,
    #[serde(rename = "fixedInfoEncoding")]
    pub fixed_info_encoding: String,
    #[serde(rename = "hmacAlg")]
    pub hmac_alg: String,
    #[serde(rename = "l")]
    pub output_bits: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Test {
    #[serde(rename = "tcId")]
    pub id: u64,
    #[serde(rename = "kdfParameter")]
    pub params: KdaParameters,
    #[serde(rename = "fixedInfoPartyU")]
    pub party_u: PartyInfo,
    #[serde(rename = "fixedInfoPartyV")]
    pub party_v: PartyInfo,
    /// Expected DKM; only present for VAL groups.
    #[serde(rename = "dkm", default)]
    pub expected_hex: Option<String>,
}

/// Per-case KDF inputs. Only `salt`, `z` and `l` are consumed; the rest
/// belong to fixed-info patterns this crate rejects.
#[derive(Debug, Clone, Deserialize)]
pub struct KdaParameters {
    #[serde(rename = "kdfType", default)]
    pub kdf_type: String,
    #[serde(rename = "salt")]
    pub salt_hex: String,
    #[serde(rename = "algorithmID", default)]
    pub algorithm_id: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "l")]
    pub output_bits: u32,
    #[serde(rename = "z")]
    pub key_hex: String,
    #[serde(rename = "t", default)]
    pub secondary_key_hex: Option<String>,
}

/// One party's fixed-info contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct PartyInfo {
    #[serde(rename = "partyId")]
    pub id_hex: String,
    /// Absent and empty both mean "no auxiliary data".
    #[serde(rename = "ephemeralData", default)]
    pub ephemeral_hex: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestGroupResponse {
    #[serde(rename = "tgId")]
    pub id: u64,
    pub tests: Vec<TestResponse>,
}

/// Exactly one of `dkm` / `testPassed` is populated; use the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResponse {
    #[serde(rename = "tcId")]
    pub id: u64,
    #[serde(rename = "dkm", skip_serializing_if = "Option::is_none")]
    key_out: Option<String>,
    #[serde(rename = "testPassed", skip_serializing_if = "Option::is_none")]
    passed: Option<bool>,
}

impl TestResponse {
    /// AFT response: lowercase hex of the derived key material.
    pub fn derived(id: u64, dkm: &[u8]) -> Self {
        Self {
            id,
            key_out: Some(hex::encode(dkm)),
            passed: None,
        }
    }

    /// VAL response.
    pub fn verdict(id: u64, passed: bool) -> Self {
        Self {
            id,
            key_out: None,
            passed: Some(passed),
        }
    }

    /// Hex DKM, set on AFT responses only.
    pub fn key_out(&self) -> Option<&str> {
        self.key_out.as_deref()
    }

    /// Verdict, set on VAL responses only.
    pub fn passed(&self) -> Option<bool> {
        self.passed
    }
}

pub fn parse_vector_set(data: &[u8]) -> Result<VectorSet, KdaError> {
    Ok(serde_json::from_slice(data)?)
}

pub fn encode_responses(groups: &[TestGroupResponse]) -> Result<Vec<u8>, KdaError> {
    Ok(serde_json::to_vec(groups)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: &str = r#"{
        "testGroups": [{
            "tgId": 7,
            "testType": "AFT",
            "kdfConfiguration": {
                "kdfType": "hkdf",
                "saltMethod": "random",
                "saltLen": 256,
                "fixedInfoPattern": "uPartyInfo||vPartyInfo",
                "fixedInfoEncoding": "concatenation",
                "hmacAlg": "SHA2-256",
                "l": 256
            },
            "tests": [{
                "tcId": 70,
                "kdfParameter": {
                    "kdfType": "hkdf",
                    "salt": "00",
                    "l": 256,
                    "z": "11"
                },
                "fixedInfoPartyU": { "partyId": "aa", "ephemeralData": "bb" },
                "fixedInfoPartyV": { "partyId": "cc" }
            }]
        }],
        "mode": "HKDF"
    }"#;

    #[test]
    fn parses_acvp_field_names() {
        let set = parse_vector_set(GROUP.as_bytes()).unwrap();
        assert_eq!(set.mode, "HKDF");
        assert_eq!(set.groups.len(), 1);

        let group = &set.groups[0];
        assert_eq!(group.id, 7);
        assert_eq!(group.config.output_bits, 256);
        assert_eq!(group.config.salt_len, 256);

        let test = &group.tests[0];
        assert_eq!(test.id, 70);
        assert_eq!(test.params.key_hex, "11");
        assert_eq!(test.party_u.ephemeral_hex.as_deref(), Some("bb"));
        assert!(test.party_v.ephemeral_hex.is_none());
        assert!(test.expected_hex.is_none());
        assert!(test.params.algorithm_id.is_none());
    }

    #[test]
    fn rejects_truncated_json() {
        let err = parse_vector_set(&GROUP.as_bytes()[..40]).unwrap_err();
        assert!(matches!(err, KdaError::MalformedInput(_)));
    }

    #[test]
    fn responses_emit_exactly_one_result_field() {
        let groups = vec![TestGroupResponse {
            id: 1,
            tests: vec![
                TestResponse::derived(1, &[0xAB, 0x01]),
                TestResponse::verdict(2, false),
            ],
        }];

        let json = String::from_utf8(encode_responses(&groups).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"[{"tgId":1,"tests":[{"tcId":1,"dkm":"ab01"},{"tcId":2,"testPassed":false}]}]"#
        );
    }

    #[test]
    fn constructors_fill_exactly_one_field() {
        let aft = TestResponse::derived(7, &[0x0F]);
        assert_eq!((aft.key_out(), aft.passed()), (Some("0f"), None));

        let val = TestResponse::verdict(8, true);
        assert_eq!((val.key_out(), val.passed()), (None, Some(true)));
    }
}
