//! One test case: decode, build info, call the backend, shape the response.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::config::HkdfParams;
use crate::error::KdaError;
use crate::fixed_info;
use crate::transact::{uint32_le, TransactError, Transactable};
use crate::wire::{Test, TestResponse};

/// How a group's responses are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// AFT: report the derived key material.
    Functional,
    /// VAL: report whether the supplied DKM is correct.
    Validation,
}

impl TestKind {
    pub fn parse(test_type: &str) -> Result<Self, KdaError> {
        match test_type {
            "AFT" => Ok(Self::Functional),
            "VAL" => Ok(Self::Validation),
            other => Err(KdaError::UnknownTestType(other.to_string())),
        }
    }
}

/// Run `test` against `backend`.
///
/// Every input is decoded before the backend is touched, so a malformed
/// fixture never costs a backend round trip.
pub fn execute(
    test: &Test,
    params: &HkdfParams,
    kind: TestKind,
    backend: &dyn Transactable,
) -> Result<TestResponse, KdaError> {
    let salt = hex::decode(&test.params.salt_hex).map_err(|e| KdaError::hex("salt", e))?;
    let key = Zeroizing::new(hex::decode(&test.params.key_hex).map_err(|e| KdaError::hex("z", e))?);

    let u = test.party_u.encode()?;
    let v = test.party_v.encode()?;
    let info = fixed_info::assemble(&u, &v, test.params.output_bits);

    let expected = match kind {
        TestKind::Validation => {
            let dkm = test.expected_hex.as_deref().ok_or_else(|| KdaError::MalformedHex {
                field: "dkm",
                reason: "missing from validation test".to_string(),
            })?;
            Some(hex::decode(dkm).map_err(|e| KdaError::hex("dkm", e))?)
        }
        TestKind::Functional => None,
    };

    let op = params.operation();
    let len = uint32_le(params.output_bytes);
    let args = [key.as_slice(), salt.as_slice(), info.as_slice(), len.as_slice()];
    let mut results = backend.transact(&op, 1, &args)?;
    if results.len() != 1 {
        let msg = format!("{} returned {} results, expected 1", op, results.len());
        return Err(TransactError::new(msg).into());
    }
    let dkm = Zeroizing::new(results.swap_remove(0));
    if dkm.len() != params.output_bytes as usize {
        return Err(TransactError::new(format!(
            "{} returned {} bytes, expected {}",
            op,
            dkm.len(),
            params.output_bytes
        ))
        .into());
    }

    tracing::trace!(tc_id = test.id, dkm_len = dkm.len(), "case complete");

    Ok(match expected {
        Some(expected) => {
            let passed = bool::from(dkm.as_slice().ct_eq(&expected));
            TestResponse::verdict(test.id, passed)
        }
        None => TestResponse::derived(test.id, &dkm),
    })
}
