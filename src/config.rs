//! Group configuration checks.
//!
//! Only one KDA shape is supported:
//!   kdfType = "hkdf", saltMethod in {"default", "random"},
//!   fixedInfoPattern containing "uPartyInfo||vPartyInfo",
//!   fixedInfoEncoding = "concatenation", l % 8 == 0

use crate::error::KdaError;
use crate::wire::KdaConfiguration;

pub const KDF_TYPE_HKDF: &str = "hkdf";
pub const SALT_METHODS: [&str; 2] = ["default", "random"];
pub const FIXED_INFO_PATTERN: &str = "uPartyInfo||vPartyInfo";
pub const FIXED_INFO_ENCODING: &str = "concatenation";

/// Prefix of the backend operation name; the HMAC algorithm is appended.
pub const OPERATION_PREFIX: &str = "KDA/HKDF/";

/// What a validated group hands to each of its test cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HkdfParams {
    pub output_bytes: u32,
    pub hash_name: String,
}

impl HkdfParams {
    /// Backend operation name, e.g. `KDA/HKDF/SHA2-256`.
    pub fn operation(&self) -> String {
        format!("{}{}", OPERATION_PREFIX, self.hash_name)
    }
}

impl KdaConfiguration {
    /// Accept the group as a whole or reject it; there is no partial result.
    pub fn extract(&self) -> Result<HkdfParams, KdaError> {
        if self.kdf_type != KDF_TYPE_HKDF
            || !SALT_METHODS.contains(&self.salt_method.as_str())
            || !self.fixed_info_pattern.contains(FIXED_INFO_PATTERN)
            || self.fixed_info_encoding != FIXED_INFO_ENCODING
            || self.output_bits % 8 != 0
        {
            return Err(KdaError::UnsupportedConfiguration);
        }

        Ok(HkdfParams {
            output_bytes: self.output_bits / 8,
            hash_name: self.hmac_alg.clone(),
        })
    }
}
