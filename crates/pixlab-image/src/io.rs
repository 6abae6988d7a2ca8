//! Image file I/O
//!
//! - `load_rgb8`: read a PNG/JPEG/BMP into an owned interleaved RGB buffer.
//! - `load_gray_f32`: read a file straight into a grayscale f32 plane.
//! - `save_gray_u8`: write a grayscale plane to disk (format from extension).

use crate::buffer::{GrayPlaneF32, GrayPlaneU8, RgbImageU8};
use image::GrayImage;
use pixlab_core::{Dimensions, LabResult};
use std::path::Path;

/// Load an image from disk as interleaved 8-bit RGB
///
/// Decode or I/O failure is reported through the error, never a panic, so
/// callers can gate any display path on a successful load.
pub fn load_rgb8<P: AsRef<Path>>(path: P) -> LabResult<RgbImageU8> {
    let img = image::open(path)?.into_rgb8();
    let dims = Dimensions::new(img.width(), img.height());
    RgbImageU8::new(dims, img.into_raw())
}

/// Load an image from disk and convert to a grayscale f32 plane
pub fn load_gray_f32<P: AsRef<Path>>(path: P) -> LabResult<GrayPlaneF32> {
    let img = image::open(path)?.into_luma8();
    let dims = Dimensions::new(img.width(), img.height());
    Ok(GrayPlaneU8::new(dims, img.into_raw())?.to_f32())
}

/// Save a grayscale plane to disk
pub fn save_gray_u8<P: AsRef<Path>>(plane: &GrayPlaneU8, path: P) -> LabResult<()> {
    let mut out = GrayImage::new(plane.width(), plane.height());
    for (i, px) in out.pixels_mut().enumerate() {
        px.0[0] = plane.as_slice()[i];
    }
    out.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_path_is_error() {
        let result = load_rgb8("./no/such/dir/sample_0.png.png");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_gray_missing_path_is_error() {
        assert!(load_gray_f32("./definitely-not-here.png").is_err());
    }
}
