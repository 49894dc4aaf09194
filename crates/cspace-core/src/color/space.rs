//! Color model capability
//!
//! Every color model in the family (HSI, and whatever variants the
//! embedding pipeline provides) is reached through [`ColorSpace`]. Models
//! are told apart by [`ColorSpace::name`], never by runtime type identity:
//! two values with the same name store directly comparable channels, and
//! anything else is converted through its RGB triple first.

use crate::color::Rgb;
use crate::{Error, Result};

/// Declared range of one channel of a color model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Smallest value the channel takes
    pub min: f64,
    /// Largest value the channel takes
    pub max: f64,
}

impl ChannelRange {
    /// Create a range, rejecting inverted or non-finite bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidChannelRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create a range from bounds known to be valid
    pub(crate) const fn new_unchecked(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether a value lies inside the range (bounds included)
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Map a value to [0, 1] relative to the range
    ///
    /// Values outside the range map outside [0, 1]; a zero-width range maps
    /// everything to 0.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 { 0.0 } else { (value - self.min) / span }
    }
}

/// Capability shared by every color model variant
///
/// The trait is object safe; distances take the other color as
/// `&dyn ColorSpace` so any variant can be compared against any other.
pub trait ColorSpace {
    /// Stable model identifier, e.g. `"hsi"`
    fn name(&self) -> &str;

    /// Current channel values `[c1, c2, c3]`
    fn channels(&self) -> [f64; 3];

    /// Declared ranges of `[c1, c2, c3]`
    fn ranges(&self) -> [ChannelRange; 3];

    /// Populate the channels from RGB components
    ///
    /// Implementations must validate with [`check_rgb`](crate::check_rgb)
    /// first and leave `self` untouched when it fails.
    fn convert_from_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<()>;

    /// RGB triple of the last conversion
    fn rgb(&self) -> Rgb;

    /// Distance to another color, in the model's own units
    fn distance(&self, other: &dyn ColorSpace) -> Result<f64>;

    /// Distance to another color, scaled to [0, 1]
    fn normalized_distance(&self, other: &dyn ColorSpace) -> Result<f64>;

    /// Whether `other` uses the same representation as `self`
    fn same_model(&self, other: &dyn ColorSpace) -> bool {
        self.name() == other.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(ChannelRange::new(0.0, 1.0).is_ok());
        assert!(ChannelRange::new(2.0, 2.0).is_ok());
        assert_eq!(
            ChannelRange::new(1.0, 0.0),
            Err(Error::InvalidChannelRange { min: 1.0, max: 0.0 })
        );
        assert!(ChannelRange::new(0.0, f64::INFINITY).is_err());
        assert!(ChannelRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_range_contains_and_normalize() {
        let range = ChannelRange::new(0.0, 255.0).unwrap();
        assert!(range.contains(0.0));
        assert!(range.contains(255.0));
        assert!(!range.contains(255.5));
        assert_eq!(range.span(), 255.0);
        assert_eq!(range.normalize(51.0), 0.2);

        let point = ChannelRange::new(3.0, 3.0).unwrap();
        assert_eq!(point.normalize(3.0), 0.0);
    }
}
