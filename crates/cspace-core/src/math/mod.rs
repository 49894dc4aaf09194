//! Mathematical helpers for color model conversions
//!
//! This module provides:
//! - Hue angle arithmetic on the [0, 2π) circle

pub mod angle;

pub use angle::{clamped_acos, hue_difference, wrap_hue};
