//! Block transforms and quality metrics
//!
//! This crate implements the 8x8 DCT (reference and separable fast path),
//! plane-level block application (serial and parallel), JPEG-style
//! quantization, and the metrics used to judge reconstruction quality.

pub mod dct;
pub mod dct_separable;
pub mod metrics;
pub mod quant;

pub use dct::*;
pub use dct_separable::*;
pub use metrics::*;
pub use quant::*;
