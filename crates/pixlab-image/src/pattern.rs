//! Deterministic synthetic test patterns

use crate::buffer::GrayPlaneF32;
use pixlab_core::{Dimensions, LabResult};

/// Diagonal grayscale gradient, values in [0, 255]
pub fn gradient_gray(width: u32, height: u32) -> LabResult<GrayPlaneF32> {
    let dims = Dimensions::new(width, height);
    let denom = (width + height).saturating_sub(2).max(1) as usize;
    let mut data = Vec::with_capacity(dims.pixel_count());
    for y in 0..height as usize {
        for x in 0..width as usize {
            let val = ((x + y) * 255 / denom).min(255);
            data.push(val as f32);
        }
    }
    GrayPlaneF32::new(dims, data)
}

/// Grayscale checkerboard with square cells of `cell` pixels
pub fn checkerboard_gray(width: u32, height: u32, cell: u32) -> LabResult<GrayPlaneF32> {
    let dims = Dimensions::new(width, height);
    let cell = cell.max(1) as usize;
    let mut data = Vec::with_capacity(dims.pixel_count());
    for y in 0..height as usize {
        for x in 0..width as usize {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            data.push(if on { 255.0 } else { 0.0 });
        }
    }
    GrayPlaneF32::new(dims, data)
}
