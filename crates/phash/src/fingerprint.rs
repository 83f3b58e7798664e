//! The fingerprint type produced by this crate.
//!
//! The fingerprint representation is part of the public contract: any
//! incompatible change to the encoding must come with a new `PHASH_VERSION`,
//! since stored fingerprints are compared bit-for-bit against new ones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FingerprintParseError;

/// A fixed-length content fingerprint, rendered as lowercase hex.
///
/// Fingerprints computed by this crate are always 16 hex digits (63
/// significant bits plus one zero pad bit). [`Fingerprint::parse`] accepts
/// other lengths so an index can carry entries from older schema versions;
/// the distance primitive is the layer that surfaces such a mismatch.
///
/// A fingerprint is a pure content digest. It carries no timestamp, asset
/// id, or any other metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Validate an externally supplied hex string as a fingerprint.
    pub fn parse(hex: &str) -> Result<Self, FingerprintParseError> {
        if hex.is_empty() {
            return Err(FingerprintParseError::Empty);
        }
        for (index, found) in hex.chars().enumerate() {
            let valid = found.is_ascii_digit() || ('a'..='f').contains(&found);
            if !valid {
                return Err(FingerprintParseError::InvalidDigit { index, found });
            }
        }
        Ok(Self(hex.to_string()))
    }

    /// The hex rendering of this fingerprint.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex digits, each covering four bits.
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn from_packed(packed: u64) -> Self {
        Self(format!("{packed:016x}"))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = FingerprintParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fingerprint::parse(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_hex() {
        let fp = Fingerprint::parse("8f373714acfcf4d0").expect("parse");
        assert_eq!(fp.as_str(), "8f373714acfcf4d0");
        assert_eq!(fp.digit_count(), 16);
    }

    #[test]
    fn parse_accepts_other_lengths() {
        // Cross-schema-version index entries may be shorter or longer; the
        // mismatch surfaces at distance time, not parse time.
        let fp = Fingerprint::parse("abc123").expect("parse");
        assert_eq!(fp.digit_count(), 6);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Fingerprint::parse(""), Err(FingerprintParseError::Empty));
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert_eq!(
            Fingerprint::parse("8F37"),
            Err(FingerprintParseError::InvalidDigit {
                index: 1,
                found: 'F'
            })
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(
            Fingerprint::parse("00gz"),
            Err(FingerprintParseError::InvalidDigit {
                index: 2,
                found: 'g'
            })
        );
    }

    #[test]
    fn from_packed_pads_to_sixteen_digits() {
        assert_eq!(Fingerprint::from_packed(0).as_str(), "0000000000000000");
        assert_eq!(
            Fingerprint::from_packed(u64::MAX).as_str(),
            "ffffffffffffffff"
        );
        assert_eq!(
            Fingerprint::from_packed(0x1a2b).as_str(),
            "0000000000001a2b"
        );
    }

    #[test]
    fn display_matches_as_str() {
        let fp = Fingerprint::parse("00ff00ff00ff00ff").expect("parse");
        assert_eq!(format!("{fp}"), fp.as_str());
    }

    #[test]
    fn serde_round_trips_as_plain_hex_string() {
        let fp = Fingerprint::parse("8f373714acfcf4d0").expect("parse");
        let json = serde_json::to_string(&fp).expect("serialize");
        assert_eq!(json, "\"8f373714acfcf4d0\"");
        let back: Fingerprint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, fp);
    }

    #[test]
    fn serde_rejects_invalid_wire_data() {
        let result: Result<Fingerprint, _> = serde_json::from_str("\"NOT-HEX\"");
        assert!(result.is_err());
    }
}
