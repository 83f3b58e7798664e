//! Two-dimensional DCT-II over the 32×32 sample grid.
//!
//! The transform must stay bit-for-bit stable: stored fingerprints are only
//! comparable to new ones while every coefficient comes out identical. The
//! 1-D kernel is the plain DCT-II,
//! `F[k] = c(k) * sum(v[n] * cos(pi * (2n + 1) * k / 64))` with
//! `c(0) = 1/sqrt(2)` and `c(k) = 1` otherwise, and no further
//! normalization. The 2-D transform is the separable form: rows, transpose,
//! rows again, transpose back.

use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::sync::OnceLock;

use crate::raster::RASTER_DIM;

fn cos_table() -> &'static [[f64; RASTER_DIM]; RASTER_DIM] {
    static TABLE: OnceLock<[[f64; RASTER_DIM]; RASTER_DIM]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [[0.0; RASTER_DIM]; RASTER_DIM];
        for (k, row) in table.iter_mut().enumerate() {
            for (n, entry) in row.iter_mut().enumerate() {
                *entry = (PI * ((2 * n + 1) * k) as f64 / (2.0 * RASTER_DIM as f64)).cos();
            }
        }
        table
    })
}

fn scale(k: usize) -> f64 {
    if k == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

fn dct_1d(v: &[f64; RASTER_DIM]) -> [f64; RASTER_DIM] {
    let table = cos_table();
    let mut out = [0.0; RASTER_DIM];
    for (k, slot) in out.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (n, &sample) in v.iter().enumerate() {
            acc += sample * table[k][n];
        }
        *slot = scale(k) * acc;
    }
    out
}

fn transpose(m: &[[f64; RASTER_DIM]; RASTER_DIM]) -> [[f64; RASTER_DIM]; RASTER_DIM] {
    let mut out = [[0.0; RASTER_DIM]; RASTER_DIM];
    for (y, row) in m.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out[x][y] = value;
        }
    }
    out
}

pub(crate) fn dct_2d(
    samples: &[[f64; RASTER_DIM]; RASTER_DIM],
) -> [[f64; RASTER_DIM]; RASTER_DIM] {
    let mut rows = [[0.0; RASTER_DIM]; RASTER_DIM];
    for (y, row) in samples.iter().enumerate() {
        rows[y] = dct_1d(row);
    }
    let mut cols = transpose(&rows);
    for row in cols.iter_mut() {
        *row = dct_1d(row);
    }
    transpose(&cols)
}
