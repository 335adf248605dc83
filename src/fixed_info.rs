//! FixedInfo (HKDF `info`) for the `uPartyInfo||vPartyInfo` pattern.
//!
//! PartyInfo (bytes):
//!   partyId || ephemeralData        (ephemeralData omitted when absent/empty)
//!
//! info (bytes):
//!   partyInfo(U) || partyInfo(V) || L
//!
//! L:
//!   output length in bits, u32 big-endian
//!
//! Concatenation is byte-adjacent; nothing is length-prefixed.

use crate::error::KdaError;
use crate::wire::PartyInfo;

/// Size of the trailing length field.
pub const LENGTH_FIELD_BYTES: usize = 4;

impl PartyInfo {
    /// Canonical byte encoding of this party's contribution.
    pub fn encode(&self) -> Result<Vec<u8>, KdaError> {
        let mut out = hex::decode(&self.id_hex).map_err(|e| KdaError::hex("partyId", e))?;

        if let Some(extra) = self.ephemeral_hex.as_deref().filter(|s| !s.is_empty()) {
            let extra = hex::decode(extra).map_err(|e| KdaError::hex("ephemeralData", e))?;
            out.extend_from_slice(&extra);
        }

        Ok(out)
    }
}

/// Build `U || V || be32(output_bits)`.
pub fn assemble(u: &[u8], v: &[u8], output_bits: u32) -> Vec<u8> {
    let mut info = Vec::with_capacity(u.len() + v.len() + LENGTH_FIELD_BYTES);
    info.extend_from_slice(u);
    info.extend_from_slice(v);
    info.extend_from_slice(&output_bits.to_be_bytes());
    info
}
