//! Core types and utilities for the pixlab experiment bench
//!
//! This crate provides the fundamental data structures shared by the
//! experiment crates: image dimensions, the sample trait, the rank-3
//! array container, and error types.

pub mod consts;
pub mod error;
pub mod grid;
pub mod types;

pub use error::{LabError, LabResult};
pub use grid::Array3;
pub use types::*;
