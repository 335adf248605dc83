//! # ACVP KDA (HKDF)
//!
//! Answers ACVP KDA HKDF vector sets: validates each group's KDF
//! configuration, rebuilds the exact `FixedInfo` bytes HKDF consumes, asks
//! a backend for the derived key material and shapes AFT/VAL responses.
//!
//! ## Quick Start
//!
//! ```rust
//! use acvp_kda::{process, HkdfBackend};
//!
//! let vectors = br#"{
//!   "testGroups": [{
//!     "tgId": 1, "testType": "AFT",
//!     "kdfConfiguration": {
//!       "kdfType": "hkdf", "saltMethod": "default", "saltLen": 256,
//!       "fixedInfoPattern": "uPartyInfo||vPartyInfo",
//!       "fixedInfoEncoding": "concatenation",
//!       "hmacAlg": "SHA2-256", "l": 128
//!     },
//!     "tests": [{
//!       "tcId": 1,
//!       "kdfParameter": { "kdfType": "hkdf", "salt": "00", "l": 128, "z": "00" },
//!       "fixedInfoPartyU": { "partyId": "61" },
//!       "fixedInfoPartyV": { "partyId": "62" }
//!     }]
//!   }],
//!   "mode": "HKDF"
//! }"#;
//!
//! let groups = process(vectors, &HkdfBackend::new()).unwrap();
//! assert_eq!(groups[0].tests[0].key_out().unwrap().len(), 32);
//! ```
//!
//! ## Supported Shape
//!
//! - **KDF**: `hkdf` with `default` or `random` salt
//! - **FixedInfo**: `uPartyInfo||vPartyInfo`, `concatenation` encoding
//! - **Output**: any whole number of bytes
//!
//! Anything else is rejected with [`KdaError::UnsupportedConfiguration`].
//!
//! ## Failure Model
//!
//! All-or-nothing. The first malformed field, unsupported group or backend
//! failure aborts the whole vector set; no partial response is produced.

#![deny(unsafe_code)]

pub mod config;
mod error;
pub mod executor;
pub mod fixed_info;
pub mod kdf;
pub mod processor;
pub mod transact;
pub mod wire;

pub use config::HkdfParams;
pub use error::KdaError;
pub use executor::{execute, TestKind};
pub use fixed_info::assemble;
pub use kdf::HkdfBackend;
pub use processor::{process, process_json, process_vector_set};
pub use transact::{uint32_le, TransactError, Transactable};
pub use wire::{
    KdaConfiguration, KdaParameters, PartyInfo, Test, TestGroup, TestGroupResponse, TestResponse,
    VectorSet,
};
