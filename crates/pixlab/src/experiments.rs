//! The experiments the bench harness dispatches to
//!
//! Each experiment is an ordinary library function returning `LabResult`,
//! so the harness stays a thin dispatcher and the behavior is testable
//! without spawning a process.

use pixlab_core::consts::{
    DEFAULT_PSNR_THRESHOLD_DB, DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY,
};
use pixlab_core::{Array3, LabError, LabResult};
use pixlab_image::GrayPlaneF32;
use pixlab_transform::{
    coeff_plane_len, dct8x8_forward, dct8x8_forward_separable, dct8x8_inverse,
    dct8x8_inverse_separable, dct_plane_par, dct_plane_separable, dequantize_plane,
    idct_plane_separable, max_abs_diff, psnr, quant_table_for_quality, quantize_plane,
};
use rayon::prelude::*;

/// Options for the quantized DCT round-trip experiment
#[derive(Debug, Clone)]
pub struct RoundtripOptions {
    /// Quantization quality (1-100, higher is better)
    pub quality: f32,
    /// PSNR the reconstruction must reach for the run to pass
    pub psnr_threshold_db: f64,
    /// Run the forward transform on the rayon pool
    pub parallel: bool,
}

impl Default for RoundtripOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            psnr_threshold_db: DEFAULT_PSNR_THRESHOLD_DB,
            parallel: false,
        }
    }
}

impl RoundtripOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
        self
    }

    pub fn psnr_threshold_db(mut self, threshold: f64) -> Self {
        self.psnr_threshold_db = threshold.max(0.0);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Outcome of a quantized round-trip
#[derive(Debug, Clone, Copy)]
pub struct DctReport {
    pub psnr_db: f64,
    pub max_abs_error: f32,
    pub passed: bool,
}

/// Forward DCT, quantize, dequantize, inverse DCT, then measure the
/// reconstruction against the input plane.
pub fn dct_roundtrip(plane: &GrayPlaneF32, options: &RoundtripOptions) -> LabResult<DctReport> {
    let width = plane.width() as usize;
    let height = plane.height() as usize;
    let samples = plane.as_slice();

    let mut coeffs = vec![0.0f32; coeff_plane_len(width, height)];
    if options.parallel {
        dct_plane_par(samples, width, height, &mut coeffs);
    } else {
        dct_plane_separable(samples, width, height, &mut coeffs);
    }

    let table = quant_table_for_quality(options.quality);
    let mut quantized = Vec::new();
    quantize_plane(&coeffs, width, height, &table, &mut quantized);
    let mut dequantized = Vec::new();
    dequantize_plane(&quantized, width, height, &table, &mut dequantized);

    let mut reconstructed = vec![0.0f32; samples.len()];
    idct_plane_separable(&dequantized, width, height, &mut reconstructed);

    let psnr_db = psnr(samples, &reconstructed)?;
    let max_abs_error = max_abs_diff(samples, &reconstructed)?;

    Ok(DctReport {
        psnr_db,
        max_abs_error,
        passed: psnr_db >= options.psnr_threshold_db,
    })
}

/// Validate the separable DCT against the reference implementation
///
/// Checks per-coefficient agreement on a set of deterministic blocks and
/// a lossless (unquantized) round-trip error bound.
pub fn validate_dct() -> LabResult<()> {
    let cases: [[f32; 64]; 4] = [
        core::array::from_fn(|_| 128.0),                    // flat
        core::array::from_fn(|i| i as f32),                 // ramp
        core::array::from_fn(|i| if i % 2 == 0 { 255.0 } else { 0.0 }), // highest frequency
        core::array::from_fn(|i| ((i * 71) % 256) as f32),  // pseudo-random
    ];

    for (case, input) in cases.iter().enumerate() {
        let mut reference = [0.0f32; 64];
        let mut separable = [0.0f32; 64];
        dct8x8_forward(input, &mut reference);
        dct8x8_forward_separable(input, &mut separable);

        for i in 0..64 {
            let diff = (reference[i] - separable[i]).abs();
            if diff >= 1e-3 {
                return Err(LabError::ValidationFailed(format!(
                    "forward mismatch, case {} coeff {}: ref={} sep={}",
                    case, i, reference[i], separable[i]
                )));
            }
        }

        let mut inv_reference = [0.0f32; 64];
        let mut inv_separable = [0.0f32; 64];
        dct8x8_inverse(&reference, &mut inv_reference);
        dct8x8_inverse_separable(&separable, &mut inv_separable);

        for i in 0..64 {
            let diff = (inv_reference[i] - inv_separable[i]).abs();
            if diff >= 1e-3 {
                return Err(LabError::ValidationFailed(format!(
                    "inverse mismatch, case {} sample {}",
                    case, i
                )));
            }
            // Lossless round-trip bound
            if (inv_separable[i] - input[i]).abs() >= 1e-2 {
                return Err(LabError::ValidationFailed(format!(
                    "roundtrip error, case {} sample {}: {} vs {}",
                    case, i, input[i], inv_separable[i]
                )));
            }
        }
    }

    Ok(())
}

/// Fill a 3x4x2 grid with 0..24 in index order and verify read-back
pub fn grid_check() -> LabResult<()> {
    let mut grid = Array3::<f64>::new(3, 4, 2);

    let mut values = 0.0;
    for i in 0..3 {
        for j in 0..4 {
            for k in 0..2 {
                grid[(i, j, k)] = values;
                values += 1.0;
            }
        }
    }

    let mut verify = 0.0;
    for i in 0..3 {
        for j in 0..4 {
            for k in 0..2 {
                if grid[(i, j, k)] != verify {
                    return Err(LabError::ValidationFailed(format!(
                        "grid value at ({}, {}, {}) is {}, expected {}",
                        i,
                        j,
                        k,
                        grid[(i, j, k)],
                        verify
                    )));
                }
                verify += 1.0;
            }
        }
    }

    Ok(())
}

/// Parallel elementwise vector add, verified against the scalar sum
pub fn vector_add(len: usize) -> LabResult<()> {
    if len == 0 {
        return Err(LabError::InvalidParameter("vector length must be > 0".into()));
    }

    let a: Vec<f32> = (0..len).map(|i| i as f32).collect();
    let b: Vec<f32> = (0..len).map(|i| (len - i) as f32).collect();

    let sum: Vec<f32> = a
        .par_iter()
        .zip(b.par_iter())
        .map(|(&x, &y)| x + y)
        .collect();

    // Every element must equal len exactly (i + (len - i))
    for (i, &s) in sum.iter().enumerate() {
        if s != len as f32 {
            return Err(LabError::ValidationFailed(format!(
                "vector add mismatch at {}: {} != {}",
                i, s, len
            )));
        }
    }

    Ok(())
}
