//! Decoding arbitrary image bytes into the fixed-size grayscale raster.
//!
//! Every fingerprint starts from a [`GrayRaster`]: exactly 32×32 grayscale
//! samples, whatever the source image's size, aspect ratio, or color depth.
//! The raster only lives for the duration of one fingerprint computation and
//! is never persisted.

use image::imageops::{self, FilterType};
use image::GenericImageView;

use crate::error::PhashError;

/// Side length of the raster sample grid.
pub const RASTER_DIM: usize = 32;

/// A decoded, fixed-size grayscale sample grid.
///
/// Dimensions are enforced by the type: there is no way to hold a raster
/// that is not exactly 32×32.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayRaster {
    samples: [[f64; RASTER_DIM]; RASTER_DIM],
}

impl GrayRaster {
    /// Build a raster from raw samples, row-major.
    ///
    /// Intended for callers that already hold decoded intensity data; the
    /// usual entry point is [`decode_raster`].
    pub fn from_samples(samples: [[f64; RASTER_DIM]; RASTER_DIM]) -> Self {
        Self { samples }
    }

    pub(crate) fn samples(&self) -> &[[f64; RASTER_DIM]; RASTER_DIM] {
        &self.samples
    }
}

/// Decode image bytes into a [`GrayRaster`].
///
/// The alpha channel is discarded, the remaining channels collapse to one
/// grayscale intensity, and the result is resized (not cropped) to 32×32
/// with a Catmull-Rom cubic kernel. Both enlargement and shrinkage are
/// allowed; aspect ratio is deliberately not preserved.
pub fn decode_raster(bytes: &[u8]) -> Result<GrayRaster, PhashError> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(PhashError::DegenerateImage { width, height });
    }

    let gray = decoded.to_luma8();
    let resized = imageops::resize(
        &gray,
        RASTER_DIM as u32,
        RASTER_DIM as u32,
        FilterType::CatmullRom,
    );

    let mut samples = [[0.0f64; RASTER_DIM]; RASTER_DIM];
    for (x, y, pixel) in resized.enumerate_pixels() {
        samples[y as usize][x as usize] = f64::from(pixel.0[0]);
    }
    Ok(GrayRaster { samples })
}
