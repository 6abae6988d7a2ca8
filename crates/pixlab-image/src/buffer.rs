//! Owned pixel buffers

use pixlab_core::{consts, Dimensions, LabError, LabResult, Sample};

/// Owned 8-bit grayscale plane
#[derive(Debug, Clone)]
pub struct GrayPlaneU8 {
    dimensions: Dimensions,
    data: Vec<u8>,
}

/// Owned f32 grayscale plane with samples in [0, 255]
///
/// The transforms operate on this range (one DCT block input is a block of
/// sample values, not normalized intensities), so the u8 conversion is a
/// plain cast rather than a [0, 1] rescale.
#[derive(Debug, Clone)]
pub struct GrayPlaneF32 {
    dimensions: Dimensions,
    data: Vec<f32>,
}

/// Owned interleaved 8-bit RGB image
#[derive(Debug, Clone)]
pub struct RgbImageU8 {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl GrayPlaneU8 {
    pub fn new(dimensions: Dimensions, data: Vec<u8>) -> LabResult<Self> {
        check_dims(dimensions)?;
        check_len(dimensions.pixel_count(), data.len())?;
        Ok(Self { dimensions, data })
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Widen to f32 samples (values stay in [0, 255])
    pub fn to_f32(&self) -> GrayPlaneF32 {
        GrayPlaneF32 {
            dimensions: self.dimensions,
            data: self.data.iter().map(|&v| v.to_f32()).collect(),
        }
    }
}

impl GrayPlaneF32 {
    pub fn new(dimensions: Dimensions, data: Vec<f32>) -> LabResult<Self> {
        check_dims(dimensions)?;
        check_len(dimensions.pixel_count(), data.len())?;
        Ok(Self { dimensions, data })
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Narrow to u8 samples, rounding and clamping to [0, 255]
    pub fn to_u8(&self) -> GrayPlaneU8 {
        GrayPlaneU8 {
            dimensions: self.dimensions,
            data: self.data.iter().map(|&v| u8::from_f32(v)).collect(),
        }
    }
}

impl RgbImageU8 {
    pub fn new(dimensions: Dimensions, data: Vec<u8>) -> LabResult<Self> {
        check_dims(dimensions)?;
        check_len(dimensions.pixel_count() * 3, data.len())?;
        Ok(Self { dimensions, data })
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Convert to a grayscale plane using the BT.601 luma weights
    pub fn to_gray_f32(&self) -> GrayPlaneF32 {
        let data = self
            .data
            .chunks_exact(3)
            .map(|px| 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32)
            .collect();
        GrayPlaneF32 {
            dimensions: self.dimensions,
            data,
        }
    }
}

fn check_dims(dimensions: Dimensions) -> LabResult<()> {
    let too_large = dimensions.width > consts::MAX_IMAGE_DIMENSION
        || dimensions.height > consts::MAX_IMAGE_DIMENSION;
    if dimensions.width == 0 || dimensions.height == 0 || too_large {
        return Err(LabError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}

fn check_len(expected: usize, actual: usize) -> LabResult<()> {
    if expected != actual {
        return Err(LabError::ShapeMismatch { expected, actual });
    }
    Ok(())
}
