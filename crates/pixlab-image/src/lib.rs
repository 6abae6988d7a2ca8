//! Image buffers, file I/O and synthetic test patterns
//!
//! Decoding and encoding go through the `image` crate; the buffer types
//! here are plain owned planes so the transform crate never depends on
//! `image` directly.

pub mod buffer;
pub mod io;
pub mod pattern;

pub use buffer::{GrayPlaneF32, GrayPlaneU8, RgbImageU8};
pub use io::{load_gray_f32, load_rgb8, save_gray_u8};
pub use pattern::{checkerboard_gray, gradient_gray};
