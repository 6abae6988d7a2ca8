//! Separable DCT implementation
//!
//! The 2D 8x8 DCT factors into 1D passes over rows then columns, with
//! precomputed cosine tables. This is the fast path used by the plane
//! transforms; it must agree with the reference implementation in `dct`
//! within 1e-3 per coefficient.
//!
//! Plane-level functions use the same padded coefficient plane layout as
//! the reference path (see `dct`): full 64-coefficient tiles, sample
//! dimensions restored on the inverse.

use crate::dct::{
    coeff_plane_len, extract_block, load_coeff_block, padded_extent, store_block,
    store_coeff_block,
};
use pixlab_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use rayon::prelude::*;
use std::f32::consts::PI;

lazy_static::lazy_static! {
    static ref COS_TABLE: [[f32; BLOCK_SIZE]; BLOCK_SIZE] = {
        let mut table = [[0.0f32; BLOCK_SIZE]; BLOCK_SIZE];
        for u in 0..BLOCK_SIZE {
            for x in 0..BLOCK_SIZE {
                let angle = ((2 * x + 1) as f32 * u as f32 * PI)
                    / (2.0 * BLOCK_SIZE as f32);
                table[u][x] = angle.cos();
            }
        }
        table
    };

    static ref SCALE_FACTORS: [f32; BLOCK_SIZE] = {
        let mut factors = [1.0f32; BLOCK_SIZE];
        factors[0] = 1.0 / 2.0f32.sqrt();
        factors
    };
}

/// 1D DCT-II (forward) on 8 samples
#[inline]
fn dct_1d_forward(input: &[f32; BLOCK_SIZE], output: &mut [f32; BLOCK_SIZE]) {
    for u in 0..BLOCK_SIZE {
        let mut sum = 0.0;
        for x in 0..BLOCK_SIZE {
            sum += input[x] * COS_TABLE[u][x];
        }
        output[u] = sum * SCALE_FACTORS[u] * 0.5; // each 1D pass carries sqrt(2/N)
    }
}

/// 1D DCT-III (inverse) on 8 samples
#[inline]
fn dct_1d_inverse(input: &[f32; BLOCK_SIZE], output: &mut [f32; BLOCK_SIZE]) {
    for x in 0..BLOCK_SIZE {
        let mut sum = 0.0;
        for u in 0..BLOCK_SIZE {
            sum += input[u] * SCALE_FACTORS[u] * COS_TABLE[u][x];
        }
        output[x] = sum * 0.5;
    }
}

/// Separable 8x8 DCT-II (forward transform)
pub fn dct8x8_forward_separable(input: &[f32; BLOCK_AREA], output: &mut [f32; BLOCK_AREA]) {
    let mut temp = [0.0f32; BLOCK_AREA];
    let mut line = [0.0f32; BLOCK_SIZE];
    let mut transformed = [0.0f32; BLOCK_SIZE];

    for y in 0..BLOCK_SIZE {
        line.copy_from_slice(&input[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]);
        dct_1d_forward(&line, &mut transformed);
        temp[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE].copy_from_slice(&transformed);
    }

    for x in 0..BLOCK_SIZE {
        for y in 0..BLOCK_SIZE {
            line[y] = temp[y * BLOCK_SIZE + x];
        }
        dct_1d_forward(&line, &mut transformed);
        for y in 0..BLOCK_SIZE {
            output[y * BLOCK_SIZE + x] = transformed[y];
        }
    }
}

/// Separable 8x8 DCT-III (inverse transform)
pub fn dct8x8_inverse_separable(input: &[f32; BLOCK_AREA], output: &mut [f32; BLOCK_AREA]) {
    let mut temp = [0.0f32; BLOCK_AREA];
    let mut line = [0.0f32; BLOCK_SIZE];
    let mut transformed = [0.0f32; BLOCK_SIZE];

    for y in 0..BLOCK_SIZE {
        line.copy_from_slice(&input[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]);
        dct_1d_inverse(&line, &mut transformed);
        temp[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE].copy_from_slice(&transformed);
    }

    for x in 0..BLOCK_SIZE {
        for y in 0..BLOCK_SIZE {
            line[y] = temp[y * BLOCK_SIZE + x];
        }
        dct_1d_inverse(&line, &mut transformed);
        for y in 0..BLOCK_SIZE {
            output[y * BLOCK_SIZE + x] = transformed[y];
        }
    }
}

/// Apply the separable forward DCT to a full plane
pub fn dct_plane_separable(plane: &[f32], width: usize, height: usize, output: &mut [f32]) {
    assert_eq!(plane.len(), width * height);
    assert_eq!(output.len(), coeff_plane_len(width, height));

    let padded_width = padded_extent(width);
    let mut block = [0.0f32; BLOCK_AREA];
    let mut transformed = [0.0f32; BLOCK_AREA];

    for block_y in (0..height).step_by(BLOCK_SIZE) {
        for block_x in (0..width).step_by(BLOCK_SIZE) {
            extract_block(plane, width, height, block_x, block_y, &mut block);
            dct8x8_forward_separable(&block, &mut transformed);
            store_coeff_block(&transformed, padded_width, block_x, block_y, output);
        }
    }
}

/// Apply the separable inverse DCT to a coefficient plane
pub fn idct_plane_separable(coeffs: &[f32], width: usize, height: usize, output: &mut [f32]) {
    assert_eq!(coeffs.len(), coeff_plane_len(width, height));
    assert_eq!(output.len(), width * height);

    let padded_width = padded_extent(width);
    let mut block = [0.0f32; BLOCK_AREA];
    let mut transformed = [0.0f32; BLOCK_AREA];

    for block_y in (0..height).step_by(BLOCK_SIZE) {
        for block_x in (0..width).step_by(BLOCK_SIZE) {
            load_coeff_block(coeffs, padded_width, block_x, block_y, &mut block);
            dct8x8_inverse_separable(&block, &mut transformed);
            store_block(&transformed, width, height, block_x, block_y, output);
        }
    }
}

/// Parallel forward DCT: the coefficient plane is block-padded, so it
/// splits into independent 8-row bands transformed on the rayon pool.
pub fn dct_plane_par(plane: &[f32], width: usize, height: usize, output: &mut [f32]) {
    assert_eq!(plane.len(), width * height);
    assert_eq!(output.len(), coeff_plane_len(width, height));

    let padded_width = padded_extent(width);

    output
        .par_chunks_mut(padded_width * BLOCK_SIZE)
        .enumerate()
        .for_each(|(band, out_band)| {
            let block_y = band * BLOCK_SIZE;
            let mut block = [0.0f32; BLOCK_AREA];
            let mut transformed = [0.0f32; BLOCK_AREA];

            for block_x in (0..width).step_by(BLOCK_SIZE) {
                extract_block(plane, width, height, block_x, block_y, &mut block);
                dct8x8_forward_separable(&block, &mut transformed);
                // Each band is exactly one full row of tiles
                store_coeff_block(&transformed, padded_width, block_x, 0, out_band);
            }
        });
}
