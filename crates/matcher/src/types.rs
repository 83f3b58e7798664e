use phash::Fingerprint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One stored pairing of a fingerprint with the caller's asset reference.
///
/// Records are owned by the caller and created exactly once, at asset
/// ingestion time. This crate only ever reads them; deletion follows the
/// owning asset's lifecycle and happens entirely outside the matcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintRecord<R> {
    /// Content fingerprint computed when the asset was ingested.
    pub fingerprint: Fingerprint,
    /// Opaque asset reference supplied by the caller.
    pub reference: R,
}

impl<R> FingerprintRecord<R> {
    pub fn new(fingerprint: Fingerprint, reference: R) -> Self {
        Self {
            fingerprint,
            reference,
        }
    }
}

/// A qualifying result from one duplicate query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DuplicateMatch<R> {
    /// The query fingerprint is bit-identical to a stored one.
    Exact { reference: R },
    /// The query fingerprint is within the near threshold of a stored one.
    Near { reference: R, distance: u32 },
}

impl<R> DuplicateMatch<R> {
    /// The matched prior asset reference.
    pub fn reference(&self) -> &R {
        match self {
            DuplicateMatch::Exact { reference } => reference,
            DuplicateMatch::Near { reference, .. } => reference,
        }
    }

    /// Bit distance between the query and the matched record.
    pub fn distance(&self) -> u32 {
        match self {
            DuplicateMatch::Exact { .. } => 0,
            DuplicateMatch::Near { distance, .. } => *distance,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, DuplicateMatch::Exact { .. })
    }
}

/// Errors from the distance primitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The two fingerprints carry a different number of hex digits. Never
    /// produced by same-version data; index entries from mixed schema
    /// versions are the usual culprit, and the inconsistency must be
    /// surfaced rather than silently skipped.
    #[error("fingerprint length mismatch: {left} vs {right} hex digits")]
    LengthMismatch { left: usize, right: usize },
}

/// Errors produced by the classification layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid match policy (bad version or threshold).
    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
    /// Distance computation against an index record failed.
    #[error("distance computation failed: {0}")]
    Distance(#[from] DistanceError),
}
