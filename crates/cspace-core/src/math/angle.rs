//! Hue angle helpers
//!
//! Hues are radians on the circle [0, 2π). These helpers keep angular
//! arithmetic finite near the degenerate points of the HSI formulas.

use std::f64::consts::{PI, TAU};

/// Shortest angular distance between two hues on the color circle
///
/// For hues in [0, 2π] the result lies in [0, π].
#[inline]
pub fn hue_difference(a: f64, b: f64) -> f64 {
    let theta = (a - b).abs();
    if theta > PI { TAU - theta } else { theta }
}

/// `acos` with its argument clamped to [-1, 1]
///
/// Ratios that should be exactly ±1 can drift just past it in floating
/// point; plain `acos` would turn that into NaN.
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Fold a hue into [0, 2π)
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
