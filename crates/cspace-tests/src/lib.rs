//! # cspace-tests
//!
//! Property and cross-model parity testing for cspace.
//!
//! This crate provides:
//! - Reproducible RGB test sets (gray ramps, hue ramps, seeded random)
//! - Foreign color models built on `palette` for cross-model distances
//! - Summary statistics over batches of distances
//!
//! ## Test Categories
//!
//! 1. **Conversion properties**: gray levels, intensity mean, hue range
//! 2. **Distance metrics**: reflexivity, symmetry, bounds, triangle inequality
//! 3. **Cross-model**: conversion through RGB, error propagation, name dispatch

pub mod patterns;
pub mod reference;
pub mod stats;

pub use patterns::{TestPattern, all_patterns, generate_pattern};
pub use reference::{NamedHsi, PaletteHsv, PaletteLab, UncheckedRgb};
pub use stats::{DistanceStats, Metric, consecutive_distances};
