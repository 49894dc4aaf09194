//! Foreign color models
//!
//! Other members of the color-space family, built on `palette`, used to
//! exercise the cross-model path of the HSI distances. Each stores the RGB
//! triple it was converted from, as the family contract requires.

use cspace_core::{ChannelRange, ColorSpace, Result, Rgb, check_rgb};
use palette::{FromColor, Hsv, Lab, Srgb};

fn srgb(rgb: Rgb) -> Srgb {
    // Components are validated before this is reached
    Srgb::<u8>::new(rgb.r as u8, rgb.g as u8, rgb.b as u8).into_format()
}

fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Channels of `other` in the model `M`, converting through RGB when needed
fn counterpart<M: ColorSpace + Default>(this: &M, other: &dyn ColorSpace) -> Result<[f64; 3]> {
    if this.same_model(other) {
        return Ok(other.channels());
    }
    let rgb = other.rgb();
    let mut converted = M::default();
    converted.convert_from_rgb(rgb.r, rgb.g, rgb.b)?;
    Ok(converted.channels())
}

/// HSV model: hue in degrees, saturation and value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteHsv {
    rgb: Rgb,
    hsv: [f64; 3],
}

impl PaletteHsv {
    pub const NAME: &'static str = "hsv";

    pub fn from_rgb(r: u32, g: u32, b: u32) -> Result<Self> {
        let mut value = Self::default();
        value.convert_from_rgb(r, g, b)?;
        Ok(value)
    }
}

impl ColorSpace for PaletteHsv {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn channels(&self) -> [f64; 3] {
        self.hsv
    }

    fn ranges(&self) -> [ChannelRange; 3] {
        [
            ChannelRange { min: 0.0, max: 360.0 },
            ChannelRange { min: 0.0, max: 1.0 },
            ChannelRange { min: 0.0, max: 1.0 },
        ]
    }

    fn convert_from_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<()> {
        check_rgb(r, g, b)?;
        let rgb = Rgb::new(r, g, b);
        let hsv = Hsv::from_color(srgb(rgb));
        self.rgb = rgb;
        self.hsv = [
            hsv.hue.into_positive_degrees() as f64,
            hsv.saturation as f64,
            hsv.value as f64,
        ];
        Ok(())
    }

    fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        Ok(euclidean(self.hsv, counterpart(self, other)?))
    }

    fn normalized_distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        let o = counterpart(self, other)?;
        let ranges = self.ranges();
        let scaled = |c: [f64; 3]| {
            [
                ranges[0].normalize(c[0]),
                ranges[1].normalize(c[1]),
                ranges[2].normalize(c[2]),
            ]
        };
        Ok(euclidean(scaled(self.hsv), scaled(o)) / 3.0_f64.sqrt())
    }
}

/// CIELAB model (D65): L* in [0, 100], a* and b* roughly [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteLab {
    rgb: Rgb,
    lab: [f64; 3],
}

impl PaletteLab {
    pub const NAME: &'static str = "lab";

    pub fn from_rgb(r: u32, g: u32, b: u32) -> Result<Self> {
        let mut value = Self::default();
        value.convert_from_rgb(r, g, b)?;
        Ok(value)
    }
}

impl ColorSpace for PaletteLab {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn channels(&self) -> [f64; 3] {
        self.lab
    }

    fn ranges(&self) -> [ChannelRange; 3] {
        [
            ChannelRange { min: 0.0, max: 100.0 },
            ChannelRange { min: -128.0, max: 127.0 },
            ChannelRange { min: -128.0, max: 127.0 },
        ]
    }

    fn convert_from_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<()> {
        check_rgb(r, g, b)?;
        let rgb = Rgb::new(r, g, b);
        let lab: Lab = Lab::from_color(srgb(rgb).into_linear());
        self.rgb = rgb;
        self.lab = [lab.l as f64, lab.a as f64, lab.b as f64];
        Ok(())
    }

    fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        Ok(euclidean(self.lab, counterpart(self, other)?))
    }

    fn normalized_distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        // Diagonal of the L*a*b* box declared by `ranges`
        let diagonal = (100.0_f64.powi(2) + 2.0 * 255.0_f64.powi(2)).sqrt();
        Ok((self.distance(other)? / diagonal).min(1.0))
    }
}

/// A model that reports whatever RGB it was built with, unchecked
///
/// Stands in for a family member whose stored triple has been corrupted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncheckedRgb(pub Rgb);

impl ColorSpace for UncheckedRgb {
    fn name(&self) -> &str {
        "unchecked-rgb"
    }

    fn channels(&self) -> [f64; 3] {
        let [r, g, b] = self.0.to_array();
        [r as f64, g as f64, b as f64]
    }

    fn ranges(&self) -> [ChannelRange; 3] {
        [ChannelRange { min: 0.0, max: 255.0 }; 3]
    }

    fn convert_from_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<()> {
        self.0 = Rgb::new(r, g, b);
        Ok(())
    }

    fn rgb(&self) -> Rgb {
        self.0
    }

    fn distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        let o = other.rgb();
        Ok(euclidean(
            self.channels(),
            [o.r as f64, o.g as f64, o.b as f64],
        ))
    }

    fn normalized_distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        Ok(self.distance(other)? / (3.0 * 255.0_f64.powi(2)).sqrt())
    }
}

/// A model that claims to be HSI and exposes fixed channels
///
/// Distances against it must use its channels, not its RGB, since the
/// model name is what decides whether conversion happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedHsi {
    pub channels: [f64; 3],
    pub rgb: Rgb,
}

impl ColorSpace for NamedHsi {
    fn name(&self) -> &str {
        cspace_core::Hsi::NAME
    }

    fn channels(&self) -> [f64; 3] {
        self.channels
    }

    fn ranges(&self) -> [ChannelRange; 3] {
        cspace_core::Hsi::RANGES
    }

    fn convert_from_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<()> {
        let hsi = cspace_core::Hsi::from_rgb(r, g, b)?;
        self.channels = hsi.channels();
        self.rgb = hsi.rgb();
        Ok(())
    }

    fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        let mut own = cspace_core::Hsi::default();
        own.convert_from_rgb(self.rgb.r, self.rgb.g, self.rgb.b)?;
        own.distance(other)
    }

    fn normalized_distance(&self, other: &dyn ColorSpace) -> Result<f64> {
        let mut own = cspace_core::Hsi::default();
        own.convert_from_rgb(self.rgb.r, self.rgb.g, self.rgb.b)?;
        own.normalized_distance(other)
    }
}
