//! Duplicate classification over caller-supplied fingerprint indexes.

use phash::Fingerprint;

use crate::distance::hamming_distance;
use crate::types::{DuplicateMatch, FingerprintRecord, MatchError};


/// First-match-within-radius query capability.
///
/// The built-in implementations run a linear scan, which is fine for small
/// catalogs but degrades with index size. Substituting a BK-tree or an
/// LSH bucket structure only requires implementing this trait; the
/// classification contract in [`classify`] stays unchanged.
pub trait FingerprintIndex<R> {
    /// Return the first stored record within `threshold` bits of `query`.
    ///
    /// Exact matches (distance 0) take priority over near matches wherever
    /// they appear. Among near matches, the first one in iteration order
    /// wins; no distance minimization is attempted, so an unstable iteration
    /// order can report different references across repeated queries when
    /// several near-duplicates exist.
    fn first_within(
        &self,
        query: &Fingerprint,
        threshold: u32,
    ) -> Result<Option<DuplicateMatch<R>>, MatchError>;
}

impl<R: Clone> FingerprintIndex<R> for [FingerprintRecord<R>] {
    fn first_within(
        &self,
        query: &Fingerprint,
        threshold: u32,
    ) -> Result<Option<DuplicateMatch<R>>, MatchError> {
        let mut near: Option<DuplicateMatch<R>> = None;
        for record in self {
            let distance = hamming_distance(query, &record.fingerprint)?;
            if distance == 0 {
                return Ok(Some(DuplicateMatch::Exact {
                    reference: record.reference.clone(),
                }));
            }
            if distance <= threshold && near.is_none() {
                near = Some(DuplicateMatch::Near {
                    reference: record.reference.clone(),
                    distance,
                });
            }
            // Keep scanning: a later exact match still outranks this
            // candidate.
        }
        Ok(near)
    }
}

impl<R: Clone> FingerprintIndex<R> for Vec<FingerprintRecord<R>> {
    fn first_within(
        &self,
        query: &Fingerprint,
        threshold: u32,
    ) -> Result<Option<DuplicateMatch<R>>, MatchError> {
        self.as_slice().first_within(query, threshold)
    }
}

/// Classify a query fingerprint against an index of stored records.
///
/// Returns `Ok(None)` when nothing qualifies, including for an empty index.
/// The scan performs reads only and takes no locks; detection is
/// best-effort with respect to concurrent index writers, so a record
/// appended mid-scan may be missed without that being a correctness bug.
///
/// A record whose fingerprint length differs from the query surfaces
/// [`MatchError::Distance`]: schema inconsistencies in the index must be
/// visible, not skipped.
pub fn classify<R, I>(
    query: &Fingerprint,
    index: &I,
    threshold: u32,
) -> Result<Option<DuplicateMatch<R>>, MatchError>
where
    I: FingerprintIndex<R> + ?Sized,
{
    index.first_within(query, threshold)
}
