//! Test color generation
//!
//! Provides reproducible sets of RGB triples for property sweeps.

use cspace_core::Rgb;
use palette::{FromColor, Hsl, Srgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test color sets
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Every gray level 0-255
    Grayscale,
    /// Hue ramp at full saturation, `n` steps
    HueRamp(usize),
    /// Colors one step away from a gray level
    NearGray,
    /// Random colors with seed, `n` samples
    Random(u64, usize),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors on the edge of the RGB cube
    GamutBoundary,
}

/// Generate the RGB triples of a pattern
pub fn generate_pattern(pattern: TestPattern) -> Vec<Rgb> {
    match pattern {
        TestPattern::ColorCube => [
            [0, 0, 0],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 255, 255],
        ]
        .into_iter()
        .map(Rgb::from_array)
        .collect(),
        TestPattern::Grayscale => (0..=255).map(|v| Rgb::new(v, v, v)).collect(),
        TestPattern::HueRamp(steps) => (0..steps)
            .map(|i| {
                let hue = (i as f32 / steps as f32) * 360.0;
                let rgb: Srgb<u8> = Srgb::from_color(Hsl::new(hue, 1.0, 0.5)).into_format();
                Rgb::from([rgb.red, rgb.green, rgb.blue])
            })
            .collect(),
        TestPattern::NearGray => (0..=255u32)
            .flat_map(|v| {
                let up = (v + 1).min(255);
                let down = v.saturating_sub(1);
                [
                    Rgb::new(up, v, v),
                    Rgb::new(v, up, v),
                    Rgb::new(v, v, up),
                    Rgb::new(down, v, v),
                    Rgb::new(v, down, v),
                    Rgb::new(v, v, down),
                ]
            })
            .collect(),
        TestPattern::Random(seed, count) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Rgb::new(
                        rng.gen_range(0..=255),
                        rng.gen_range(0..=255),
                        rng.gen_range(0..=255),
                    )
                })
                .collect()
        }
        TestPattern::SkinTones => [
            [255, 224, 189],
            [241, 194, 125],
            [224, 172, 105],
            [198, 134, 66],
            [141, 85, 36],
            [89, 47, 42],
        ]
        .into_iter()
        .map(Rgb::from_array)
        .collect(),
        TestPattern::GamutBoundary => [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 128, 0],
            [128, 0, 255],
        ]
        .into_iter()
        .map(Rgb::from_array)
        .collect(),
    }
}

/// Every pattern, with a fixed seed for the random one
pub fn all_patterns() -> Vec<Rgb> {
    [
        TestPattern::ColorCube,
        TestPattern::Grayscale,
        TestPattern::HueRamp(360),
        TestPattern::NearGray,
        TestPattern::Random(42, 2000),
        TestPattern::SkinTones,
        TestPattern::GamutBoundary,
    ]
    .into_iter()
    .flat_map(generate_pattern)
    .collect()
}
