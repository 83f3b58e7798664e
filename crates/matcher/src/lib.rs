//! # Pixdup Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the fingerprint crate (`phash`) and decides
//! whether newly fingerprinted content duplicates something the caller has
//! already stored. It owns two things: the bit-distance primitive between
//! fingerprints, and the classification of a query against a caller-supplied
//! index of previously stored records.
//!
//! In a typical deployment you will:
//! - Use `phash` to fingerprint each upload as it arrives.
//! - Load the existing `(fingerprint, asset reference)` pairs for the
//!   relevant scope into [`FingerprintRecord`] values.
//! - Call [`classify`] and short-circuit storage when it reports a match.
//!
//! ## Core Types
//!
//! - [`FingerprintRecord`]: one stored pairing of a fingerprint with the
//!   caller's opaque asset reference.
//! - [`DuplicateMatch`]: a qualifying result, either `Exact` (bit-identical)
//!   or `Near` (within the configured Hamming-distance threshold).
//! - [`MatchPolicy`]: the caller-held threshold configuration.
//! - [`FingerprintIndex`]: the query capability the classifier runs against,
//!   so the built-in linear scan can later be swapped for a sub-linear
//!   structure without touching the classification contract.
//!
//! ## Concurrency
//!
//! Classification only reads the supplied index and takes no locks. There is
//! no isolation guarantee against concurrent writers: a record appended
//! mid-scan may be missed, and detection is best-effort by design, never
//! linearizable. Callers needing bounded latency over very large indexes
//! must impose their own deadline around the scan.

pub mod distance;
pub mod engine;
pub mod policy;
pub mod types;

pub use crate::distance::hamming_distance;
pub use crate::engine::{classify, FingerprintIndex};
pub use crate::policy::{MatchPolicy, DEFAULT_NEAR_THRESHOLD};
pub use crate::types::{DistanceError, DuplicateMatch, FingerprintRecord, MatchError};
