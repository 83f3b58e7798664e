//! # Pixdup Perceptual Fingerprinting
//!
//! This crate computes fixed-length perceptual fingerprints from raster image
//! bytes. Two images that are visually identical but byte-different (for
//! example the same picture re-encoded, re-compressed, or mildly resized)
//! produce fingerprints at a small Hamming distance from each other, which is
//! what downstream duplicate classification keys off.
//!
//! ## Contract
//!
//! - Fingerprinting is a pure function of the input bytes: no I/O beyond
//!   reading them, no clocks, no randomness, no global process state.
//! - The output length never varies with the source image's dimensions,
//!   aspect ratio, or format.
//! - It is safe to fingerprint any number of images concurrently; nothing is
//!   shared between invocations.
//!
//! Invariant: byte-identical inputs produce byte-identical fingerprints,
//! across repeated calls and across process restarts.
//!
//! ## Core Pipeline
//!
//! 1.  **Decode + raster**: The input bytes are decoded, the alpha channel is
//!     discarded, and the image is collapsed to a single grayscale channel,
//!     then resized (not cropped) to a fixed 32×32 sample grid with a cubic
//!     kernel. Aspect ratio is deliberately not preserved.
//!
//! 2.  **Frequency transform**: A two-dimensional DCT-II re-expresses the
//!     grid as cosine coefficients of increasing frequency. The low
//!     frequencies capture coarse visual structure and survive re-encoding;
//!     the high frequencies carry compression noise and are discarded.
//!
//! 3.  **Median binarization**: The top-left 8×8 coefficient block is kept,
//!     minus the DC term (overall brightness, not discriminative). Each of
//!     the remaining 63 coefficients becomes one bit: set when the
//!     coefficient is strictly above the block median. The bits pack into a
//!     16-character lowercase hex string.
//!
//! ## Example Usage
//!
//! ```
//! use phash::{fingerprint_raster, GrayRaster, FINGERPRINT_HEX_LEN, RASTER_DIM};
//!
//! let mut samples = [[0.0; RASTER_DIM]; RASTER_DIM];
//! for (y, row) in samples.iter_mut().enumerate() {
//!     for (x, sample) in row.iter_mut().enumerate() {
//!         *sample = ((x * 7 + y * 3) % 256) as f64;
//!     }
//! }
//!
//! let fingerprint = fingerprint_raster(&GrayRaster::from_samples(samples));
//!
//! assert_eq!(fingerprint.as_str().len(), FINGERPRINT_HEX_LEN);
//! ```
//!
pub mod error;
pub mod fingerprint;
pub mod raster;
mod dct;

use rayon::prelude::*;

pub use crate::error::{FingerprintParseError, PhashError};
pub use crate::fingerprint::Fingerprint;
pub use crate::raster::{decode_raster, GrayRaster, RASTER_DIM};

/// Current fingerprint algorithm version for this crate.
pub const PHASH_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const PHASH_ALGORITHM: &str = "dct32median_v1";

/// Number of significant bits in a fingerprint produced by this crate.
pub const FINGERPRINT_BITS: usize = 63;

/// Hex-digit length of a fingerprint produced by this crate.
pub const FINGERPRINT_HEX_LEN: usize = 16;

/// Side length of the low-frequency coefficient block.
const BLOCK_DIM: usize = 8;

/// Compute the content fingerprint of raw image bytes.
///
/// Decodes the bytes (PNG, JPEG, or WebP), collapses them to a 32×32
/// grayscale raster, and runs the DCT/median pipeline. Decode failures are
/// hard failures: an image that cannot be fingerprinted must not silently
/// bypass duplicate detection.
pub fn fingerprint_bytes(bytes: &[u8]) -> Result<Fingerprint, PhashError> {
    let raster = decode_raster(bytes)?;
    Ok(fingerprint_raster(&raster))
}

/// Compute the content fingerprint of an already-decoded raster.
///
/// This is the pure transform stage of [`fingerprint_bytes`], exposed for
/// callers that hold decoded samples of their own.
pub fn fingerprint_raster(raster: &GrayRaster) -> Fingerprint {
    let freq = dct::dct_2d(raster.samples());

    // Low-frequency 8x8 block in row-major order, minus the DC term, which
    // encodes overall brightness rather than structure.
    let mut coeffs = Vec::with_capacity(FINGERPRINT_BITS);
    for (y, row) in freq.iter().take(BLOCK_DIM).enumerate() {
        for (x, &value) in row.iter().take(BLOCK_DIM).enumerate() {
            if y == 0 && x == 0 {
                continue;
            }
            coeffs.push(value);
        }
    }

    let median = median_of(&coeffs);

    // Pack MSB-first; one trailing zero bit pads the final nibble so the hex
    // rendering has a whole number of digits.
    let mut packed = 0u64;
    for &value in &coeffs {
        packed = (packed << 1) | u64::from(value > median);
    }
    packed <<= 1;

    Fingerprint::from_packed(packed)
}

/// Fingerprint many images in parallel.
///
/// Each element is fingerprinted independently on the Rayon pool; results
/// keep the input order and each carries its own decode outcome.
pub fn fingerprint_batch<B>(items: &[B]) -> Vec<Result<Fingerprint, PhashError>>
where
    B: AsRef<[u8]> + Sync,
{
    items
        .par_iter()
        .map(|item| fingerprint_bytes(item.as_ref()))
        .collect()
}

fn median_of(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted[sorted.len() / 2]
}
