//! Unified error type for KDA vector-set processing.
//!
//! Every variant aborts the whole vector-set run. Nothing here is retried
//! or downgraded to a per-case failure.

use std::fmt;

use crate::transact::TransactError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdaError {
    /// The vector set is not structurally valid JSON for this algorithm.
    MalformedInput(String),
    /// A hex-encoded field failed to decode.
    MalformedHex { field: &'static str, reason: String },
    /// The group's KDF configuration is not the single supported HKDF shape.
    UnsupportedConfiguration,
    /// `testType` was neither `AFT` nor `VAL`.
    UnknownTestType(String),
    /// The backend call failed or returned nothing usable.
    Backend(TransactError),
}

impl KdaError {
    pub(crate) fn hex(field: &'static str, err: hex::FromHexError) -> Self {
        Self::MalformedHex {
            field,
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for KdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(msg) => write!(f, "malformed vector set: {}", msg),
            Self::MalformedHex { field, reason } => {
                write!(f, "invalid hex in {}: {}", field, reason)
            }
            Self::UnsupportedConfiguration => write!(f, "Test group not configured for KDA HKDF"),
            Self::UnknownTestType(t) => write!(f, "unknown test type {:?}", t),
            Self::Backend(e) => write!(f, "KDA_HKDF operation failed: {}", e),
        }
    }
}

impl std::error::Error for KdaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for KdaError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

impl From<TransactError> for KdaError {
    fn from(e: TransactError) -> Self {
        Self::Backend(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_carry_operation_context() {
        let err = KdaError::from(TransactError::new("subprocess exited"));
        assert_eq!(err.to_string(), "KDA_HKDF operation failed: subprocess exited");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn hex_errors_name_the_field() {
        let err = KdaError::hex("salt", hex::decode("zz").unwrap_err());
        assert!(err.to_string().starts_with("invalid hex in salt:"));
    }
}
