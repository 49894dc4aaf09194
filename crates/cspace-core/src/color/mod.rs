//! Color models and the capability they share
//!
//! This module provides:
//! - The `ColorSpace` capability implemented by every color model
//! - The integer RGB triple and its validity check
//! - The HSI (hue, saturation, intensity) model

pub mod hsi;
pub mod rgb;
pub mod space;

pub use hsi::{Hsi, NormalizationWeights};
pub use rgb::{RGB_MAX, Rgb, check_rgb};
pub use space::{ChannelRange, ColorSpace};
