//! Error types for the fingerprinting pipeline.

use thiserror::Error;

/// Errors returned by fingerprint computation.
#[derive(Debug, Error)]
pub enum PhashError {
    /// The input bytes could not be decoded as a supported raster image.
    /// Callers should reject the upload rather than skip the duplicate check.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// Decoding succeeded but the raster cannot be meaningfully resized.
    #[error("decoded image has unusable dimensions {width}x{height}")]
    DegenerateImage { width: u32, height: u32 },
}

/// Errors from validating an externally supplied fingerprint string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintParseError {
    #[error("fingerprint must not be empty")]
    Empty,

    #[error("fingerprint must be lowercase hex; found {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}
