//! Quantization for the lossy round-trip experiment
//!
//! Plane-level functions operate on the padded coefficient plane produced
//! by the forward DCT (see `dct`): every tile is a full 8x8, so the table
//! applies uniformly.

use crate::dct::{coeff_plane_len, padded_extent};
use pixlab_core::consts::{BLOCK_AREA, BLOCK_SIZE, MAX_QUALITY, MIN_QUALITY};

/// Quantization table for 8x8 blocks (JPEG-style)
pub type QuantTable = [u16; BLOCK_AREA];

/// Standard JPEG luminance base matrix
const BASE_QUANT: QuantTable = [
    16, 11, 10, 16, 24, 40, 51, 61, 12, 12, 14, 19, 26, 58, 60, 55, 14, 13, 16, 24, 40, 57, 69,
    56, 14, 17, 22, 29, 51, 87, 80, 62, 18, 22, 37, 56, 68, 109, 103, 77, 24, 35, 55, 64, 81,
    104, 113, 92, 49, 64, 78, 87, 103, 121, 120, 101, 72, 92, 95, 98, 112, 100, 103, 99,
];

/// Generate a quantization table for a quality parameter (1-100)
pub fn quant_table_for_quality(quality: f32) -> QuantTable {
    let quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
    let scale = if quality < 50.0 {
        5000.0 / quality
    } else {
        200.0 - 2.0 * quality
    };

    let mut table = [0u16; BLOCK_AREA];
    for i in 0..BLOCK_AREA {
        let q = ((BASE_QUANT[i] as f32 * scale / 100.0) + 0.5).max(1.0) as u16;
        table[i] = q.min(255);
    }

    table
}

/// Quantize one block of DCT coefficients
pub fn quantize_block(coeffs: &[f32; BLOCK_AREA], table: &QuantTable, output: &mut [i16; BLOCK_AREA]) {
    for i in 0..BLOCK_AREA {
        output[i] = (coeffs[i] / table[i] as f32).round() as i16;
    }
}

/// Dequantize one block of DCT coefficients
pub fn dequantize_block(coeffs: &[i16; BLOCK_AREA], table: &QuantTable, output: &mut [f32; BLOCK_AREA]) {
    for i in 0..BLOCK_AREA {
        output[i] = coeffs[i] as f32 * table[i] as f32;
    }
}

/// Quantize a coefficient plane for a `width x height` sample plane
pub fn quantize_plane(
    coeffs: &[f32],
    width: usize,
    height: usize,
    table: &QuantTable,
    output: &mut Vec<i16>,
) {
    assert_eq!(coeffs.len(), coeff_plane_len(width, height));

    let padded_width = padded_extent(width);
    let padded_height = padded_extent(height);
    output.clear();
    output.resize(coeffs.len(), 0);

    for block_y in (0..padded_height).step_by(BLOCK_SIZE) {
        for block_x in (0..padded_width).step_by(BLOCK_SIZE) {
            for y in 0..BLOCK_SIZE {
                for x in 0..BLOCK_SIZE {
                    let q = table[y * BLOCK_SIZE + x] as f32;
                    let idx = (block_y + y) * padded_width + (block_x + x);
                    output[idx] = (coeffs[idx] / q).round() as i16;
                }
            }
        }
    }
}

/// Dequantize a coefficient plane for a `width x height` sample plane
pub fn dequantize_plane(
    coeffs: &[i16],
    width: usize,
    height: usize,
    table: &QuantTable,
    output: &mut Vec<f32>,
) {
    assert_eq!(coeffs.len(), coeff_plane_len(width, height));

    let padded_width = padded_extent(width);
    let padded_height = padded_extent(height);
    output.clear();
    output.resize(coeffs.len(), 0.0);

    for block_y in (0..padded_height).step_by(BLOCK_SIZE) {
        for block_x in (0..padded_width).step_by(BLOCK_SIZE) {
            for y in 0..BLOCK_SIZE {
                for x in 0..BLOCK_SIZE {
                    let q = table[y * BLOCK_SIZE + x] as f32;
                    let idx = (block_y + y) * padded_width + (block_x + x);
                    output[idx] = coeffs[idx] as f32 * q;
                }
            }
        }
    }
}

/// Quantize then dequantize a coefficient plane in place. This is the
/// loss the round-trip experiment measures.
pub fn requantize_plane(coeffs: &mut [f32], width: usize, height: usize, table: &QuantTable) {
    let mut quantized = Vec::new();
    quantize_plane(coeffs, width, height, table, &mut quantized);

    let mut dequantized = Vec::new();
    dequantize_plane(&quantized, width, height, table, &mut dequantized);

    coeffs.copy_from_slice(&dequantized);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_at_least_one() {
        for q in [1.0, 10.0, 50.0, 90.0, 100.0] {
            let table = quant_table_for_quality(q);
            assert!(table.iter().all(|&v| v >= 1), "quality {} produced a zero entry", q);
        }
    }

    #[test]
    fn test_table_monotone_in_quality() {
        let low = quant_table_for_quality(30.0);
        let high = quant_table_for_quality(90.0);
        for i in 0..BLOCK_AREA {
            assert!(high[i] <= low[i], "entry {} not monotone", i);
        }
    }

    #[test]
    fn test_quality_clamped() {
        assert_eq!(quant_table_for_quality(0.0), quant_table_for_quality(1.0));
        assert_eq!(quant_table_for_quality(250.0), quant_table_for_quality(100.0));
    }

    #[test]
    fn test_block_quantize_roundtrip_scale() {
        let table = quant_table_for_quality(50.0);
        let coeffs: [f32; BLOCK_AREA] = core::array::from_fn(|i| (i as f32) * 10.0);

        let mut q = [0i16; BLOCK_AREA];
        let mut dq = [0.0f32; BLOCK_AREA];
        quantize_block(&coeffs, &table, &mut q);
        dequantize_block(&q, &table, &mut dq);

        // Error per coefficient is bounded by half a quantization step
        for i in 0..BLOCK_AREA {
            assert!((coeffs[i] - dq[i]).abs() <= table[i] as f32 / 2.0 + 0.001);
        }
    }

    #[test]
    fn test_plane_quantize_matches_block_path() {
        let table = quant_table_for_quality(75.0);
        let coeffs: [f32; BLOCK_AREA] = core::array::from_fn(|i| ((i * 17) % 100) as f32 - 50.0);

        let mut q_plane = Vec::new();
        quantize_plane(&coeffs, 8, 8, &table, &mut q_plane);
        let mut dq_plane = Vec::new();
        dequantize_plane(&q_plane, 8, 8, &table, &mut dq_plane);

        let mut q = [0i16; BLOCK_AREA];
        let mut dq = [0.0f32; BLOCK_AREA];
        quantize_block(&coeffs, &table, &mut q);
        dequantize_block(&q, &table, &mut dq);

        assert_eq!(&q_plane[..], &q[..]);
        for i in 0..BLOCK_AREA {
            assert!((dq_plane[i] - dq[i]).abs() < 0.001);
        }
    }

    #[test]
    fn test_quantize_plane_padded_layout() {
        // A 9x9 sample plane has a 16x16 coefficient plane; all four tiles
        // must be quantized, not just the in-bounds corner.
        let table = quant_table_for_quality(50.0);
        let coeffs = vec![100.0f32; coeff_plane_len(9, 9)];

        let mut quantized = Vec::new();
        quantize_plane(&coeffs, 9, 9, &table, &mut quantized);

        assert_eq!(quantized.len(), 16 * 16);
        assert!(quantized.iter().any(|&v| v != 0));
        // DC position of the bottom-right tile got the same treatment as
        // the top-left one
        assert_eq!(quantized[8 * 16 + 8], quantized[0]);
    }

    #[test]
    fn test_requantize_plane_matches_named_ops() {
        let table = quant_table_for_quality(75.0);
        let coeffs: [f32; BLOCK_AREA] = core::array::from_fn(|i| ((i * 17) % 100) as f32 - 50.0);

        let mut fused = coeffs.to_vec();
        requantize_plane(&mut fused, 8, 8, &table);

        let mut q = Vec::new();
        quantize_plane(&coeffs, 8, 8, &table, &mut q);
        let mut dq = Vec::new();
        dequantize_plane(&q, 8, 8, &table, &mut dq);

        for i in 0..BLOCK_AREA {
            assert!((fused[i] - dq[i]).abs() < 0.001);
        }
    }
}
