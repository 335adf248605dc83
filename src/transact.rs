//! Backend capability.
//!
//! The processor never computes HKDF itself. It names an operation and hands
//! positional byte-string arguments to whatever implements [`Transactable`]:
//! a subprocess speaking the ACVP module wrapper protocol, or the in-process
//! [`HkdfBackend`](crate::kdf::HkdfBackend).
//!
//! KDA/HKDF call:
//!   op   = "KDA/HKDF/" || hmacAlg
//!   args = key || salt || info || uint32_le(output_bytes)
//!   ret  = [dkm]

use std::fmt;

/// Transport or computation failure reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactError {
    message: String,
}

impl TransactError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransactError {}

pub trait Transactable {
    /// Run `op` once and return its results.
    ///
    /// `expected_results` is the number of byte strings the caller wants back.
    fn transact(
        &self,
        op: &str,
        expected_results: usize,
        args: &[&[u8]],
    ) -> Result<Vec<Vec<u8>>, TransactError>;
}

/// Length arguments travel little-endian, unlike the big-endian `L` in info.
pub fn uint32_le(n: u32) -> [u8; 4] {
    n.to_le_bytes()
}
