//! Match policy configuration.
//!
//! The threshold is a caller-held policy constant, not something baked into
//! the classifier: product code decides how different two images may be and
//! still count as the same content.

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Default near-duplicate threshold: up to 10 of the 63 compared bits
/// (roughly 16%) may differ.
pub const DEFAULT_NEAR_THRESHOLD: u32 = 10;

/// Caller-held policy for one duplicate query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Policy schema version.
    pub version: u32,
    /// Maximum Hamming distance still classified as a near-duplicate.
    pub near_threshold: u32,
}

impl MatchPolicy {
    /// Create a new policy with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the near-duplicate threshold. Smaller values are stricter.
    pub fn with_near_threshold(mut self, near_threshold: u32) -> Self {
        self.near_threshold = near_threshold;
        self
    }

    /// Validate policy parameters.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version < 1 {
            return Err(MatchError::InvalidPolicy(format!(
                "version must be >= 1 (got {})",
                self.version
            )));
        }
        if self.near_threshold as usize >= phash::FINGERPRINT_BITS {
            return Err(MatchError::InvalidPolicy(format!(
                "near_threshold must be below the fingerprint bit width (got {})",
                self.near_threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            version: 1,
            near_threshold: DEFAULT_NEAR_THRESHOLD,
        }
    }
}
