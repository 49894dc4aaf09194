//! RGB Color Primitives
//!
//! This module provides the 8-bit-range RGB triple every color model is
//! converted from, and the validity check that guards those conversions.

use crate::error::{Error, Result, RgbChannel};

/// Largest valid value of an RGB component
pub const RGB_MAX: u32 = 255;

/// Validate that each RGB component lies in [0, 255]
///
/// The first offending component is reported. Conversions call this before
/// touching any of their fields.
pub fn check_rgb(r: u32, g: u32, b: u32) -> Result<()> {
    for (channel, value) in [
        (RgbChannel::Red, r),
        (RgbChannel::Green, g),
        (RgbChannel::Blue, b),
    ] {
        if value > RGB_MAX {
            tracing::debug!(%channel, value, "rejecting out-of-range RGB component");
            return Err(Error::InvalidRgb { channel, value });
        }
    }
    Ok(())
}

/// RGB color with integer components (0-255 when valid)
///
/// Components are stored unvalidated so that foreign color models can hand
/// back whatever they hold; [`Rgb::check`] decides whether it is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component
    pub r: u32,
    /// Green component
    pub g: u32,
    /// Blue component
    pub b: u32,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u32; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u32; 3] {
        [self.r, self.g, self.b]
    }

    /// Run [`check_rgb`] on the components
    #[inline]
    pub fn check(&self) -> Result<()> {
        check_rgb(self.r, self.g, self.b)
    }

    /// True when all three components are equal (achromatic)
    #[inline]
    pub fn is_gray_level(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Sum of the components as a real number
    #[inline]
    pub fn sum(&self) -> f64 {
        self.r as f64 + self.g as f64 + self.b as f64
    }

    /// Smallest component
    #[inline]
    pub fn min_channel(&self) -> u32 {
        self.r.min(self.g.min(self.b))
    }

    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red primary
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green primary
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl From<[u32; 3]> for Rgb {
    fn from(arr: [u32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0] as u32, arr[1] as u32, arr[2] as u32)
    }
}

impl From<Rgb> for [u32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}
