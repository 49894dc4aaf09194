//! HSI Color Space
//!
//! HSI describes a color by its Hue, Saturation and Intensity, a
//! cylindrical perceptual model derived directly from RGB.
//!
//! - c1, hue: angle on the color wheel, [0, 2π] radians
//! - c2, saturation: color purity, [0, 1]
//! - c3, intensity: mean of the RGB components, [0, 255]
//!
//! Gray levels (r == g == b) have no geometric hue; by convention their hue
//! is exactly π and their saturation exactly 0.
//!
//! # Distance
//!
//! Distances follow A. Koschan, *Dense Stereo Correspondence Using
//! Polychromatic Block Matching*, CAIP 1993: hue and saturation are polar
//! coordinates on a plane, intensity is the cylinder axis.
//!
//! ```
//! use cspace_core::{ColorSpace, Hsi};
//!
//! let white = Hsi::default();
//! let black = Hsi::from_rgb(0, 0, 0)?;
//! assert_eq!(white.distance(&black)?, 255.0);
//! # Ok::<(), cspace_core::Error>(())
//! ```

use std::f64::consts::{PI, TAU};

use crate::color::{ChannelRange, ColorSpace, Rgb, check_rgb};
use crate::math::{clamped_acos, hue_difference, wrap_hue};
use crate::{Error, Result};

/// Term maxima used by [`Hsi::normalized_distance_with`]
///
/// Each squared term of the distance is divided by its maximum, then the
/// two are blended in proportion to those maxima. The weights are single
/// precision so results match the rest of the color-space family exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationWeights {
    /// Maximum of the squared intensity difference
    pub intensity: f32,
    /// Maximum of the squared hue/saturation chord
    pub chroma: f32,
}

impl NormalizationWeights {
    fn validate(&self) -> Result<()> {
        let valid = |w: f32| w.is_finite() && w > 0.0;
        if valid(self.intensity) && valid(self.chroma) {
            Ok(())
        } else {
            Err(Error::InvalidWeights {
                intensity: self.intensity,
                chroma: self.chroma,
            })
        }
    }
}

impl Default for NormalizationWeights {
    fn default() -> Self {
        Self {
            intensity: 255.0 * 255.0,
            chroma: 4.0,
        }
    }
}

/// HSI color value
///
/// Holds the RGB triple it was converted from alongside the three HSI
/// channels. The default value is white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsi {
    rgb: Rgb,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl Hsi {
    /// Model identifier
    pub const NAME: &'static str = "hsi";

    /// Declared ranges of hue, saturation and intensity
    pub const RANGES: [ChannelRange; 3] = [
        ChannelRange::new_unchecked(0.0, TAU),
        ChannelRange::new_unchecked(0.0, 1.0),
        ChannelRange::new_unchecked(0.0, 255.0),
    ];

    /// Convert RGB components into a new HSI value
    pub fn from_rgb(r: u32, g: u32, b: u32) -> Result<Self> {
        check_rgb(r, g, b)?;
        Ok(Self::convert(Rgb::new(r, g, b)))
    }

    /// Hue in radians, [0, 2π)
    #[inline]
    pub fn hue(&self) -> f64 {
        self.c1
    }

    /// Saturation, [0, 1]
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.c2
    }

    /// Intensity, [0, 255]
    #[inline]
    pub fn intensity(&self) -> f64 {
        self.c3
    }

    /// True when the source RGB triple is achromatic
    #[inline]
    pub fn is_gray_level(&self) -> bool {
        self.rgb.is_gray_level()
    }

    /// Normalized distance with explicit term maxima
    ///
    /// `d1 = Δintensity² / w1` and `d2 = chord² / w2` are blended as
    /// `d1 * w1/(w1+w2) + d2 * w2/(w1+w2)`.
    pub fn normalized_distance_with(
        &self,
        other: &dyn ColorSpace,
        weights: NormalizationWeights,
    ) -> Result<f64> {
        weights.validate()?;
        let o = self.counterpart(other)?;

        let theta = hue_difference(self.c1, o[0]);
        let d1 = (self.c3 - o[2]).powi(2);
        let d2 = self.c2.powi(2) + o[1].powi(2) - 2.0 * self.c2 * o[1] * theta.cos();
        let d2 = d2.max(0.0);

        let mut w1 = weights.intensity;
        let mut w2 = weights.chroma;
        let d1 = d1 / f64::from(w1);
        let d2 = d2 / f64::from(w2);

        let total = w1 + w2;
        w1 /= total;
        w2 /= total;
        Ok(d1 * f64::from(w1) + d2 * f64::from(w2))
    }

    /// RGB → HSI for components already known to be valid
    fn convert(rgb: Rgb) -> Self {
        let gray_level = rgb.is_gray_level();
        let sum = rgb.sum();

        let mut hue = PI;
        if !gray_level {
            let (r, g, b) = (rgb.r as f64, rgb.g as f64, rgb.b as f64);
            let rg = r - g;
            let rb = r - b;
            let gb = g - b;
            let n1 = 0.5 * (rg + rb);
            let n2 = (rg.powi(2) + rb * gb).sqrt();
            if n2 > 0.0 && n2.is_finite() {
                let mut h = clamped_acos(n1 / n2);
                // Blue-dominant hues sit on the lower half of the wheel
                if rgb.b > rgb.g {
                    h = TAU - h;
                }
                hue = wrap_hue(h);
            } else {
                tracing::debug!(?rgb, n2, "degenerate hue denominator, using gray-level hue");
            }
        }

        let saturation = if gray_level {
            0.0
        } else if sum > 0.0 {
            1.0 - 3.0 * rgb.min_channel() as f64 / sum
        } else {
            tracing::debug!(?rgb, "zero RGB sum, using gray-level saturation");
            0.0
        };

        Self {
            rgb,
            c1: hue,
            c2: saturation,
            c3: sum / 3.0,
        }
    }

    /// HSI channels of `other`, converting through RGB when it is a
    /// different model
    fn counterpart(&self, other: &dyn ColorSpace) -> Result<[f64; 3]> {
        if self.same_model(other) {
            return Ok(other.channels());
        }
        let rgb = other.rgb();
        tracing::trace!(model = other.name(), ?rgb, "converting foreign color to hsi");
        let converted = Self::from_rgb(rgb.r, rgb.g, rgb.b)?;
        Ok(converted.channels())
    }
}

impl Default for Hsi {
    fn default() -> Self {
        Self::convert(Rgb::WHITE)
    }
}

impl ColorSpace for Hsi {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn channels(&self) -> [f64; 3] {
        [self.c1, self.c2, self.c3]
    }

    fn ranges(&self) -> [ChannelRange; 3] {
        Self::RANGES
    }

    fn convert_from_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<()> {
        *self = Self::from_rgb(r, g, b)?;
        Ok(())
    }

    fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Koschan distance, unbounded: intensity contributes up to 255 and
    /// the hue/saturation chord up to 2
    fn distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        let o = self.counterpart(other)?;
        let theta = hue_difference(self.c1, o[0]);
        let squared = (self.c3 - o[2]).powi(2) + self.c2.powi(2) + o[1].powi(2)
            - 2.0 * self.c2 * o[1] * theta.cos();
        Ok(squared.max(0.0).sqrt())
    }

    fn normalized_distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        self.normalized_distance_with(other, NormalizationWeights::default())
    }
}
