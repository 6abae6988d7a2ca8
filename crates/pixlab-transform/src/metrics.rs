//! Reconstruction quality metrics

use pixlab_core::consts::PSNR_CAP_DB;
use pixlab_core::{LabError, LabResult};

/// Mean squared error between two planes of equal length
pub fn mse(a: &[f32], b: &[f32]) -> LabResult<f64> {
    if a.len() != b.len() {
        return Err(LabError::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Err(LabError::InvalidParameter("empty planes".into()));
    }

    let mut sum = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let diff = x as f64 - y as f64;
        sum += diff * diff;
    }
    Ok(sum / a.len() as f64)
}

/// Peak signal-to-noise ratio in dB against a 255 peak
///
/// An exact match has infinite PSNR; it is reported as the cap value so
/// reports stay finite and comparable.
pub fn psnr(a: &[f32], b: &[f32]) -> LabResult<f64> {
    let mse = mse(a, b)?;
    if mse == 0.0 {
        return Ok(PSNR_CAP_DB);
    }
    Ok((20.0 * 255.0f64.log10() - 10.0 * mse.log10()).min(PSNR_CAP_DB))
}

/// Largest absolute per-sample difference
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> LabResult<f32> {
    if a.len() != b.len() {
        return Err(LabError::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).abs())
        .fold(0.0, f32::max))
}
