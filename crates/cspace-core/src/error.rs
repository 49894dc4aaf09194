//! Error types for cspace

use std::fmt;

use thiserror::Error;

/// Result type for cspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// RGB component named in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for RgbChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RgbChannel::Red => "red",
            RgbChannel::Green => "green",
            RgbChannel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in cspace operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// RGB component outside [0, 255]
    #[error("Invalid RGB input: {channel} = {value}, expected 0..=255")]
    InvalidRgb { channel: RgbChannel, value: u32 },

    /// Channel range with inverted or non-finite bounds
    #[error("Invalid channel range: [{min}, {max}]")]
    InvalidChannelRange { min: f64, max: f64 },

    /// Normalization weights that are not strictly positive and finite
    #[error("Invalid normalization weights: intensity = {intensity}, chroma = {chroma}")]
    InvalidWeights { intensity: f32, chroma: f32 },
}
