//! Constants used throughout the pixlab workspace

/// Maximum supported image dimension
pub const MAX_IMAGE_DIMENSION: u32 = 268435456; // 2^28

/// Transform block size (8x8 tiles)
pub const BLOCK_SIZE: usize = 8;

/// Number of coefficients in one block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Default quality for the quantized round-trip experiment (1-100)
pub const DEFAULT_QUALITY: f32 = 90.0;

/// Minimum and maximum quality values
pub const MIN_QUALITY: f32 = 1.0;
pub const MAX_QUALITY: f32 = 100.0;

/// PSNR reported for an exact reconstruction
pub const PSNR_CAP_DB: f64 = 100.0;

/// Default PSNR a quantized round-trip must reach to pass
pub const DEFAULT_PSNR_THRESHOLD_DB: f64 = 30.0;
