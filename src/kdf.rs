//! In-process KDA/HKDF backend.
//!
//! dkm = HKDF-<hmacAlg>(ikm = key, salt = salt, info = info, len = output_bytes)
//!
//! Serves the same operation names and argument layout a module wrapper
//! would, so the processor cannot tell it apart from a subprocess.

use hkdf::SimpleHkdf;
use sha2::digest::core_api::BlockSizeUser;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::config::OPERATION_PREFIX;
use crate::transact::{TransactError, Transactable};

/// HMAC algorithm names (ACVP spelling) this backend can serve.
pub const SUPPORTED_HASHES: &[&str] = &[
    "SHA2-224",
    "SHA2-256",
    "SHA2-384",
    "SHA2-512",
    "SHA2-512/224",
    "SHA2-512/256",
    "SHA3-224",
    "SHA3-256",
    "SHA3-384",
    "SHA3-512",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HkdfBackend;

impl HkdfBackend {
    pub fn new() -> Self {
        Self
    }

    /// Compute HKDF directly, bypassing the transact argument encoding.
    pub fn derive(
        &self,
        hash_name: &str,
        key: &[u8],
        salt: &[u8],
        info: &[u8],
        output_bytes: usize,
    ) -> Result<Vec<u8>, TransactError> {
        match hash_name {
            "SHA2-224" => derive::<Sha224>(key, salt, info, output_bytes),
            "SHA2-256" => derive::<Sha256>(key, salt, info, output_bytes),
            "SHA2-384" => derive::<Sha384>(key, salt, info, output_bytes),
            "SHA2-512" => derive::<Sha512>(key, salt, info, output_bytes),
            "SHA2-512/224" => derive::<Sha512_224>(key, salt, info, output_bytes),
            "SHA2-512/256" => derive::<Sha512_256>(key, salt, info, output_bytes),
            "SHA3-224" => derive::<Sha3_224>(key, salt, info, output_bytes),
            "SHA3-256" => derive::<Sha3_256>(key, salt, info, output_bytes),
            "SHA3-384" => derive::<Sha3_384>(key, salt, info, output_bytes),
            "SHA3-512" => derive::<Sha3_512>(key, salt, info, output_bytes),
            other => Err(TransactError::new(format!("unsupported HMAC algorithm {:?}", other))),
        }
    }
}

impl Transactable for HkdfBackend {
    fn transact(
        &self,
        op: &str,
        expected_results: usize,
        args: &[&[u8]],
    ) -> Result<Vec<Vec<u8>>, TransactError> {
        let hash_name = op
            .strip_prefix(OPERATION_PREFIX)
            .ok_or_else(|| TransactError::new(format!("unknown operation {:?}", op)))?;

        if expected_results != 1 {
            return Err(TransactError::new(format!(
                "{} yields 1 result, {} requested",
                op, expected_results
            )));
        }

        let [key, salt, info, len] = args else {
            return Err(TransactError::new(format!(
                "{} takes 4 arguments, got {}",
                op,
                args.len()
            )));
        };

        let len: [u8; 4] = (*len)
            .try_into()
            .map_err(|_| TransactError::new("output length argument must be 4 bytes"))?;
        let output_bytes = u32::from_le_bytes(len) as usize;

        tracing::trace!(op, output_bytes, info_len = info.len(), "hkdf");

        let dkm = self.derive(hash_name, key, salt, info, output_bytes)?;
        Ok(vec![dkm])
    }
}

fn derive<H>(key: &[u8], salt: &[u8], info: &[u8], output_bytes: usize) -> Result<Vec<u8>, TransactError>
where
    H: Digest + BlockSizeUser + Clone,
{
    let too_long = || TransactError::new(format!("HKDF cannot produce {} bytes", output_bytes));

    // RFC 5869 ceiling; checked before the output buffer is allocated.
    if output_bytes > 255 * <H as Digest>::output_size() {
        return Err(too_long());
    }

    let hk = SimpleHkdf::<H>::new(Some(salt), key);
    let mut okm = vec![0u8; output_bytes];
    hk.expand(info, &mut okm).map_err(|_| too_long())?;
    Ok(okm)
}
