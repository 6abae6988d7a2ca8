//! # pixlab - image-transform experiment bench
//!
//! This crate is the high-level surface of the pixlab workspace: it
//! re-exports the core types and exposes the experiments the bench tool
//! dispatches to.
//!
//! ## Quick start
//!
//! ```no_run
//! use pixlab::{dct_roundtrip, load_gray_f32, RoundtripOptions};
//!
//! let plane = load_gray_f32("input.png").unwrap();
//! let report = dct_roundtrip(&plane, &RoundtripOptions::default()).unwrap();
//! println!("PSNR: {:.2} dB (passed: {})", report.psnr_db, report.passed);
//! ```
//!
//! ## Experiments
//!
//! - [`dct_roundtrip`]: forward DCT, quantize, dequantize, inverse DCT,
//!   judged by PSNR against the input plane
//! - [`validate_dct`]: separable fast path vs reference agreement plus a
//!   lossless round-trip bound
//! - [`grid_check`]: rank-3 array fill/read-back ordering check
//! - [`vector_add`]: parallel elementwise add with scalar verification

pub mod experiments;

// Re-export core types
pub use pixlab_core::{consts, Array3, Dimensions, LabError, LabResult, Sample};

// Re-export image buffers and I/O
pub use pixlab_image::{
    checkerboard_gray, gradient_gray, load_gray_f32, load_rgb8, save_gray_u8, GrayPlaneF32,
    GrayPlaneU8, RgbImageU8,
};

pub use experiments::{dct_roundtrip, grid_check, validate_dct, vector_add, DctReport,
    RoundtripOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
