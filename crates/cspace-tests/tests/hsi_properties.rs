//! HSI Conversion Properties
//!
//! Checks the conversion invariants over the whole RGB cube and the
//! boundary behaviour of the validity check.

use std::f64::consts::{PI, TAU};

use anyhow::{Result, ensure};
use cspace_core::{ColorSpace, Error, Hsi, Rgb, RgbChannel};
use cspace_tests::{TestPattern, generate_pattern};
use rayon::prelude::*;

const EPSILON: f64 = 1e-9;

fn check_conversion(rgb: Rgb) -> Result<()> {
    let hsi = Hsi::from_rgb(rgb.r, rgb.g, rgb.b)?;
    let [hue, sat, int] = hsi.channels();

    ensure!(hsi.rgb() == rgb, "{rgb:?}: stored rgb {:?}", hsi.rgb());
    ensure!(
        hue.is_finite() && (0.0..TAU).contains(&hue),
        "{rgb:?}: hue {hue} outside [0, 2π)"
    );
    ensure!(
        sat.is_finite() && (0.0..=1.0).contains(&sat),
        "{rgb:?}: saturation {sat} outside [0, 1]"
    );
    ensure!(
        (int - rgb.sum() / 3.0).abs() < EPSILON,
        "{rgb:?}: intensity {int} is not the channel mean"
    );
    if rgb.is_gray_level() {
        ensure!(hue == PI, "{rgb:?}: gray hue {hue}");
        ensure!(sat == 0.0, "{rgb:?}: gray saturation {sat}");
    } else {
        ensure!(sat > 0.0, "{rgb:?}: chromatic color with zero saturation");
    }
    Ok(())
}

#[test]
fn test_full_rgb_cube() -> Result<()> {
    (0u32..=255).into_par_iter().try_for_each(|r| {
        for g in 0..=255 {
            for b in 0..=255 {
                check_conversion(Rgb::new(r, g, b))?;
            }
        }
        Ok(())
    })
}

#[test]
fn test_every_gray_level() -> Result<()> {
    for rgb in generate_pattern(TestPattern::Grayscale) {
        let hsi = Hsi::from_rgb(rgb.r, rgb.g, rgb.b)?;
        assert_eq!(hsi.hue(), PI);
        assert_eq!(hsi.saturation(), 0.0);
        assert_eq!(hsi.intensity(), rgb.r as f64);
        assert!(hsi.is_gray_level());
    }
    Ok(())
}

#[test]
fn test_near_gray_stays_finite() -> Result<()> {
    for rgb in generate_pattern(TestPattern::NearGray) {
        check_conversion(rgb)?;
    }
    Ok(())
}

#[test]
fn test_concrete_white() -> Result<()> {
    let hsi = Hsi::from_rgb(255, 255, 255)?;
    assert_eq!(hsi.hue(), PI);
    assert_eq!(hsi.saturation(), 0.0);
    assert_eq!(hsi.intensity(), 255.0);
    assert_eq!(hsi, Hsi::default());
    Ok(())
}

#[test]
fn test_concrete_red() -> Result<()> {
    let hsi = Hsi::from_rgb(255, 0, 0)?;
    assert_eq!(hsi.hue(), 0.0);
    assert_eq!(hsi.saturation(), 1.0);
    assert!((hsi.intensity() - 85.0).abs() < EPSILON);
    Ok(())
}

#[test]
fn test_hue_increases_around_the_wheel() -> Result<()> {
    // A full-saturation ramp walks the wheel once, so hue only wraps once
    let ramp = generate_pattern(TestPattern::HueRamp(36));
    let hues: Vec<f64> = ramp
        .iter()
        .map(|c| Hsi::from_rgb(c.r, c.g, c.b).map(|h| h.hue()))
        .collect::<cspace_core::Result<_>>()?;
    let decreases = hues.windows(2).filter(|w| w[1] < w[0]).count();
    assert_eq!(decreases, 0, "hues: {hues:?}");
    Ok(())
}

#[test]
fn test_out_of_range_rejected() {
    for (rgb, channel, value) in [
        ((256, 0, 0), RgbChannel::Red, 256),
        ((0, 1000, 0), RgbChannel::Green, 1000),
        ((0, 0, u32::MAX), RgbChannel::Blue, u32::MAX),
    ] {
        assert_eq!(
            Hsi::from_rgb(rgb.0, rgb.1, rgb.2),
            Err(Error::InvalidRgb { channel, value })
        );
    }
}

#[test]
fn test_failed_conversion_keeps_previous_state() -> Result<()> {
    let mut hsi = Hsi::from_rgb(40, 80, 120)?;
    let before = hsi;
    assert!(hsi.convert_from_rgb(40, 80, 300).is_err());
    assert_eq!(hsi, before);
    assert_eq!(hsi.rgb(), Rgb::new(40, 80, 120));
    Ok(())
}

#[test]
fn test_declared_ranges_hold_for_samples() -> Result<()> {
    for rgb in generate_pattern(TestPattern::Random(7, 5000)) {
        let hsi = Hsi::from_rgb(rgb.r, rgb.g, rgb.b)?;
        for (value, range) in hsi.channels().into_iter().zip(hsi.ranges()) {
            assert!(range.contains(value), "{rgb:?}: {value} not in {range:?}");
        }
    }
    Ok(())
}
