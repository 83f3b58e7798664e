//! Workspace umbrella crate for pixdup perceptual image deduplication.
//!
//! This crate stitches together fingerprint computation and duplicate
//! classification so upload pipelines can run the whole duplicate check with
//! a single API entry point: [`dedupe_bytes`] fingerprints the incoming
//! image and classifies it against the caller's index in one call.
//!
//! The returned [`DedupeOutcome`] always carries the computed fingerprint,
//! whatever the verdict, so callers can persist it alongside the stored
//! asset and keep the index complete for future queries. What to do with a
//! confirmed duplicate (reuse the prior asset, store anyway, warn) is a
//! caller decision. So is fail-open integration: if the duplicate check
//! errors for operational reasons, an upload pipeline that prefers
//! availability should proceed without duplicate protection and surface the
//! failure through its own diagnostics; this crate always reports the error.

pub use matcher::{
    DEFAULT_NEAR_THRESHOLD, DistanceError, DuplicateMatch, FingerprintIndex, FingerprintRecord,
    MatchError, MatchPolicy, classify, hamming_distance,
};
pub use phash::{
    FINGERPRINT_BITS, FINGERPRINT_HEX_LEN, Fingerprint, FingerprintParseError, GrayRaster,
    PHASH_ALGORITHM, PHASH_VERSION, PhashError, RASTER_DIM, decode_raster, fingerprint_batch,
    fingerprint_bytes, fingerprint_raster,
};

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{Level, info, warn};

/// Errors that can occur while running the duplicate check pipeline.
#[derive(Debug)]
pub enum PipelineError {
    Fingerprint(PhashError),
    Match(MatchError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Fingerprint(err) => write!(f, "fingerprint failure: {err}"),
            PipelineError::Match(err) => write!(f, "classification failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Fingerprint(err) => Some(err),
            PipelineError::Match(err) => Some(err),
        }
    }
}

impl From<PhashError> for PipelineError {
    fn from(value: PhashError) -> Self {
        PipelineError::Fingerprint(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// Coarse verdict of one duplicate check, for logging and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Exact,
    Near,
    Novel,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Exact => "exact",
            Verdict::Near => "near",
            Verdict::Novel => "novel",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one duplicate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupeOutcome<R> {
    /// The fingerprint computed for the query input. Persist it with the
    /// stored asset regardless of the verdict.
    pub fingerprint: Fingerprint,
    /// The qualifying match, when one was found.
    pub matched: Option<DuplicateMatch<R>>,
}

impl<R> DedupeOutcome<R> {
    pub fn verdict(&self) -> Verdict {
        match &self.matched {
            None => Verdict::Novel,
            Some(DuplicateMatch::Exact { .. }) => Verdict::Exact,
            Some(DuplicateMatch::Near { .. }) => Verdict::Near,
        }
    }
}

/// Metrics observer for duplicate check stages.
pub trait DedupeMetrics: Send + Sync {
    fn record_fingerprint(&self, latency: Duration, result: Result<(), &PhashError>);
    fn record_classify(&self, latency: Duration, result: Result<(), &MatchError>);
}

/// Install or clear the global dedupe metrics recorder.
pub fn set_dedupe_metrics(recorder: Option<Arc<dyn DedupeMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("dedupe metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn DedupeMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn DedupeMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn DedupeMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn DedupeMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_fingerprint(self, result: Result<(), &PhashError>) {
        self.recorder
            .record_fingerprint(self.start.elapsed(), result);
    }

    fn record_classify(self, result: Result<(), &MatchError>) {
        self.recorder.record_classify(self.start.elapsed(), result);
    }
}

/// Run the full duplicate check with the default match policy.
pub fn dedupe_bytes<R, I>(bytes: &[u8], index: &I) -> Result<DedupeOutcome<R>, PipelineError>
where
    I: FingerprintIndex<R> + ?Sized,
{
    dedupe_bytes_with_policy(bytes, index, &MatchPolicy::default())
}

/// Run the full duplicate check with an explicit match policy.
///
/// Computes the fingerprint of `bytes`, then classifies it against `index`.
/// Decode failures propagate as hard failures; an image that cannot be
/// fingerprinted must not silently bypass duplicate detection.
pub fn dedupe_bytes_with_policy<R, I>(
    bytes: &[u8],
    index: &I,
    policy: &MatchPolicy,
) -> Result<DedupeOutcome<R>, PipelineError>
where
    I: FingerprintIndex<R> + ?Sized,
{
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "dedupe.check", input_len = bytes.len());
    let _guard = span.enter();

    policy.validate().map_err(PipelineError::Match)?;

    let fingerprint_metrics = MetricsSpan::start();
    let fingerprint = match fingerprint_bytes(bytes) {
        Ok(fp) => {
            if let Some(span) = fingerprint_metrics {
                span.record_fingerprint(Ok(()));
            }
            fp
        }
        Err(err) => {
            if let Some(span) = fingerprint_metrics {
                span.record_fingerprint(Err(&err));
            }
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "dedupe_check_failure");
            return Err(PipelineError::Fingerprint(err));
        }
    };

    let classify_metrics = MetricsSpan::start();
    match classify(&fingerprint, index, policy.near_threshold) {
        Ok(matched) => {
            if let Some(span) = classify_metrics {
                span.record_classify(Ok(()));
            }
            let outcome = DedupeOutcome {
                fingerprint,
                matched,
            };
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                fingerprint = %outcome.fingerprint,
                verdict = outcome.verdict().as_str(),
                elapsed_micros,
                "dedupe_check_success"
            );
            Ok(outcome)
        }
        Err(err) => {
            if let Some(span) = classify_metrics {
                span.record_classify(Err(&err));
            }
            let elapsed_micros = start.elapsed().as_micros();
            warn!(
                fingerprint = %fingerprint,
                error = %err,
                elapsed_micros,
                "dedupe_check_failure"
            );
            Err(PipelineError::Match(err))
        }
    }
}
