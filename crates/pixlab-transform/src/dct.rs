//! Reference DCT (Discrete Cosine Transform) implementation
//!
//! Direct O(N^4) orthonormal 8x8 DCT-II/DCT-III. Slow but obviously
//! correct; the separable implementation is validated against it.
//!
//! Plane-level transforms work on a coefficient plane padded up to block
//! multiples: the forward pass replication-pads partial edge tiles and
//! keeps all 64 coefficients per tile, the inverse consumes full tiles
//! and crops back to the sample dimensions. Keeping the full coefficient
//! set is what makes round-trips exact up to float error on planes that
//! are not multiples of 8.

use pixlab_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use std::f32::consts::PI;

/// Smallest block multiple covering `n`
pub fn padded_extent(n: usize) -> usize {
    n.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Length of the coefficient plane for a `width x height` sample plane
pub fn coeff_plane_len(width: usize, height: usize) -> usize {
    padded_extent(width) * padded_extent(height)
}

/// 8x8 DCT-II (forward transform)
pub fn dct8x8_forward(input: &[f32; BLOCK_AREA], output: &mut [f32; BLOCK_AREA]) {
    const N: usize = BLOCK_SIZE;

    for u in 0..N {
        for v in 0..N {
            let cu = if u == 0 { 1.0 / 2.0f32.sqrt() } else { 1.0 };
            let cv = if v == 0 { 1.0 / 2.0f32.sqrt() } else { 1.0 };

            let mut sum = 0.0;
            for y in 0..N {
                for x in 0..N {
                    sum += input[y * N + x]
                        * (((2 * x + 1) as f32 * u as f32 * PI) / (2.0 * N as f32)).cos()
                        * (((2 * y + 1) as f32 * v as f32 * PI) / (2.0 * N as f32)).cos();
                }
            }
            output[v * N + u] = sum * cu * cv * 2.0 / N as f32;
        }
    }
}

/// 8x8 DCT-III (inverse transform)
pub fn dct8x8_inverse(input: &[f32; BLOCK_AREA], output: &mut [f32; BLOCK_AREA]) {
    const N: usize = BLOCK_SIZE;

    for y in 0..N {
        for x in 0..N {
            let mut sum = 0.0;
            for u in 0..N {
                for v in 0..N {
                    let cu = if u == 0 { 1.0 / 2.0f32.sqrt() } else { 1.0 };
                    let cv = if v == 0 { 1.0 / 2.0f32.sqrt() } else { 1.0 };

                    sum += input[v * N + u]
                        * cu
                        * cv
                        * (((2 * x + 1) as f32 * u as f32 * PI) / (2.0 * N as f32)).cos()
                        * (((2 * y + 1) as f32 * v as f32 * PI) / (2.0 * N as f32)).cos();
                }
            }
            output[y * N + x] = sum * 2.0 / N as f32;
        }
    }
}

/// Copy an 8x8 tile out of a sample plane, replicating edge samples for
/// tiles that overhang the right/bottom border.
pub(crate) fn extract_block(
    plane: &[f32],
    width: usize,
    height: usize,
    block_x: usize,
    block_y: usize,
    block: &mut [f32; BLOCK_AREA],
) {
    for y in 0..BLOCK_SIZE {
        let src_y = (block_y + y).min(height - 1);
        for x in 0..BLOCK_SIZE {
            let src_x = (block_x + x).min(width - 1);
            block[y * BLOCK_SIZE + x] = plane[src_y * width + src_x];
        }
    }
}

/// Write a full 8x8 coefficient tile into the padded coefficient plane
pub(crate) fn store_coeff_block(
    block: &[f32; BLOCK_AREA],
    padded_width: usize,
    block_x: usize,
    block_y: usize,
    coeffs: &mut [f32],
) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            coeffs[(block_y + y) * padded_width + (block_x + x)] = block[y * BLOCK_SIZE + x];
        }
    }
}

/// Read a full 8x8 coefficient tile from the padded coefficient plane
pub(crate) fn load_coeff_block(
    coeffs: &[f32],
    padded_width: usize,
    block_x: usize,
    block_y: usize,
    block: &mut [f32; BLOCK_AREA],
) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            block[y * BLOCK_SIZE + x] = coeffs[(block_y + y) * padded_width + (block_x + x)];
        }
    }
}

/// Write back the in-bounds portion of an 8x8 sample tile
pub(crate) fn store_block(
    block: &[f32; BLOCK_AREA],
    width: usize,
    height: usize,
    block_x: usize,
    block_y: usize,
    plane: &mut [f32],
) {
    for y in 0..BLOCK_SIZE.min(height - block_y) {
        for x in 0..BLOCK_SIZE.min(width - block_x) {
            plane[(block_y + y) * width + (block_x + x)] = block[y * BLOCK_SIZE + x];
        }
    }
}

/// Apply the reference forward DCT to a full plane, 8x8 tile at a time
///
/// `plane` holds `width * height` samples; `output` must hold
/// `coeff_plane_len(width, height)` coefficients.
pub fn dct_plane(plane: &[f32], width: usize, height: usize, output: &mut [f32]) {
    assert_eq!(plane.len(), width * height);
    assert_eq!(output.len(), coeff_plane_len(width, height));

    let padded_width = padded_extent(width);
    let mut block = [0.0f32; BLOCK_AREA];
    let mut transformed = [0.0f32; BLOCK_AREA];

    for block_y in (0..height).step_by(BLOCK_SIZE) {
        for block_x in (0..width).step_by(BLOCK_SIZE) {
            extract_block(plane, width, height, block_x, block_y, &mut block);
            dct8x8_forward(&block, &mut transformed);
            store_coeff_block(&transformed, padded_width, block_x, block_y, output);
        }
    }
}

/// Apply the reference inverse DCT to a coefficient plane
///
/// `coeffs` holds `coeff_plane_len(width, height)` coefficients; `output`
/// receives `width * height` samples.
pub fn idct_plane(coeffs: &[f32], width: usize, height: usize, output: &mut [f32]) {
    assert_eq!(coeffs.len(), coeff_plane_len(width, height));
    assert_eq!(output.len(), width * height);

    let padded_width = padded_extent(width);
    let mut block = [0.0f32; BLOCK_AREA];
    let mut transformed = [0.0f32; BLOCK_AREA];

    for block_y in (0..height).step_by(BLOCK_SIZE) {
        for block_x in (0..width).step_by(BLOCK_SIZE) {
            load_coeff_block(coeffs, padded_width, block_x, block_y, &mut block);
            dct8x8_inverse(&block, &mut transformed);
            store_block(&transformed, width, height, block_x, block_y, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_extent() {
        assert_eq!(padded_extent(8), 8);
        assert_eq!(padded_extent(9), 16);
        assert_eq!(padded_extent(1), 8);
        assert_eq!(coeff_plane_len(13, 11), 16 * 16);
        assert_eq!(coeff_plane_len(16, 16), 16 * 16);
    }

    #[test]
    fn test_dc_only_block() {
        // A flat block transforms to a single DC coefficient
        let input = [100.0f32; BLOCK_AREA];
        let mut output = [0.0f32; BLOCK_AREA];
        dct8x8_forward(&input, &mut output);

        assert!((output[0] - 800.0).abs() < 0.01); // 100 * 8 for orthonormal DCT
        for &ac in &output[1..] {
            assert!(ac.abs() < 0.01);
        }
    }

    #[test]
    fn test_block_roundtrip() {
        let input: [f32; BLOCK_AREA] = core::array::from_fn(|i| ((i * 7) % 256) as f32);
        let mut coeffs = [0.0f32; BLOCK_AREA];
        let mut back = [0.0f32; BLOCK_AREA];

        dct8x8_forward(&input, &mut coeffs);
        dct8x8_inverse(&coeffs, &mut back);

        for i in 0..BLOCK_AREA {
            assert!(
                (input[i] - back[i]).abs() < 0.01,
                "roundtrip error at {}: {} vs {}",
                i,
                input[i],
                back[i]
            );
        }
    }

    #[test]
    fn test_plane_roundtrip_non_aligned_is_exact() {
        // 13x11 exercises partial tiles on both edges; keeping the full
        // coefficient tiles makes the round-trip exact everywhere.
        let width = 13;
        let height = 11;
        let plane: Vec<f32> = (0..width * height).map(|i| ((i * 31) % 256) as f32).collect();

        let mut coeffs = vec![0.0f32; coeff_plane_len(width, height)];
        let mut back = vec![0.0f32; plane.len()];
        dct_plane(&plane, width, height, &mut coeffs);
        idct_plane(&coeffs, width, height, &mut back);

        for i in 0..plane.len() {
            assert!(
                (plane[i] - back[i]).abs() < 0.1,
                "plane roundtrip diverged at {}: {} vs {}",
                i,
                plane[i],
                back[i]
            );
        }
    }

    #[test]
    fn test_plane_roundtrip_aligned_is_tight() {
        let width = 16;
        let height = 16;
        let plane: Vec<f32> = (0..width * height).map(|i| ((i * 31) % 256) as f32).collect();

        let mut coeffs = vec![0.0f32; coeff_plane_len(width, height)];
        let mut back = vec![0.0f32; plane.len()];
        dct_plane(&plane, width, height, &mut coeffs);
        idct_plane(&coeffs, width, height, &mut back);

        for i in 0..plane.len() {
            assert!((plane[i] - back[i]).abs() < 0.01);
        }
    }
}
