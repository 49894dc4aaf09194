//! # cspace - color models and perceptual color distance
//!
//! Converts 8-bit RGB pixels into the HSI (hue, saturation, intensity)
//! model and measures perceptual distances between colors, including
//! colors held by other members of the color-space family.
//!
//! ## Color models
//!
//! Every model implements [`ColorSpace`]. Models are identified by
//! [`ColorSpace::name`]; when two colors use different models, the other
//! color is converted through its RGB triple before comparison.
//!
//! ## Quick Start
//!
//! ```
//! use cspace_core::{ColorSpace, Hsi};
//!
//! let red = Hsi::from_rgb(255, 0, 0)?;
//! assert_eq!(red.hue(), 0.0);
//! assert_eq!(red.saturation(), 1.0);
//!
//! let orange = Hsi::from_rgb(255, 128, 0)?;
//! let raw = red.distance(&orange)?;
//! let unit = red.normalized_distance(&orange)?;
//! assert!(raw > unit && (0.0..=1.0).contains(&unit));
//! # Ok::<(), cspace_core::Error>(())
//! ```
//!
//! ## Invalid input
//!
//! RGB components above 255 are rejected with [`Error::InvalidRgb`] before
//! anything is computed:
//!
//! ```
//! use cspace_core::{Error, Hsi};
//!
//! assert!(matches!(Hsi::from_rgb(0, 300, 0), Err(Error::InvalidRgb { .. })));
//! ```

pub mod color;
pub mod error;
pub mod math;

pub use color::{ChannelRange, ColorSpace, Hsi, NormalizationWeights, Rgb, check_rgb};
pub use error::{Error, Result, RgbChannel};

/// Version of cspace
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
