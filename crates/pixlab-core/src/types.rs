//! Shared types for pixlab

use num_traits::NumCast;

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Image sample type
///
/// Conversions are value-preserving: `to_f32` keeps the numeric sample
/// value (a u8 sample of 200 widens to 200.0, not a normalized fraction),
/// and `from_f32` rounds and clamps back into the type's range. The
/// transforms operate on planes in this convention.
pub trait Sample: Copy + NumCast + PartialOrd {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
}

impl Sample for u8 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl Sample for u16 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, 65535.0) as u16
    }
}

impl Sample for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_pixel_count() {
        let dims = Dimensions::new(640, 480);
        assert_eq!(dims.pixel_count(), 640 * 480);
    }

    #[test]
    fn test_sample_u8_roundtrip() {
        for v in [0u8, 1, 127, 254, 255] {
            assert_eq!(u8::from_f32(v.to_f32()), v);
        }
    }

    #[test]
    fn test_sample_preserves_value() {
        assert_eq!(200u8.to_f32(), 200.0);
        assert_eq!(1000u16.to_f32(), 1000.0);
        assert_eq!(u8::from_f32(99.6), 100);
    }

    #[test]
    fn test_sample_from_f32_clamps() {
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(-1.0), 0);
        assert_eq!(u16::from_f32(70000.0), 65535);
    }
}
