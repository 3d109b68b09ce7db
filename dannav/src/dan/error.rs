//! Address codec errors.

use thiserror::Error;

/// Errors raised while encoding or decoding a DAN.
///
/// Every variant is an invalid-input failure: it is reported to the caller
/// synchronously and retrying with the same input will fail again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DanError {
    /// The input is not 12 digits once separators are removed.
    #[error("Invalid DAN format: '{0}' (expected 12 digits, optionally as CCC-SS-LLLLLLL)")]
    Format(String),

    /// The DAN does not start with the national country code.
    #[error("Invalid country code '{found}' (expected {expected})")]
    CountryCode {
        expected: &'static str,
        found: String,
    },

    /// A state name that is not in the state table.
    #[error("Unknown state: '{0}'")]
    UnknownState(String),

    /// A two-digit state code that is not in the state table.
    #[error("Invalid state code: '{0}'")]
    UnknownStateCode(String),

    /// The footprint has no usable `[lon, lat]` positions.
    #[error("Footprint contains no valid coordinates")]
    EmptyFootprint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DanError::UnknownState("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));

        let err = DanError::CountryCode {
            expected: "234",
            found: "999".to_string(),
        };
        assert!(err.to_string().contains("999"));
        assert!(err.to_string().contains("234"));
    }
}
