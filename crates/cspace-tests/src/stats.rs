//! Summary statistics over batches of distances

use cspace_core::{ColorSpace, Hsi, Result, Rgb};

/// Statistics from a batch of distance measurements
#[derive(Debug, Clone)]
pub struct DistanceStats {
    /// Smallest distance
    pub min: f64,
    /// Mean distance
    pub mean: f64,
    /// Largest distance
    pub max: f64,
    /// 95th percentile distance
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DistanceStats {
    /// Summarize a set of distances; `None` when it is empty or holds a
    /// non-finite value
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() || samples.iter().any(|d| !d.is_finite()) {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let p95_idx = ((count as f64 * 0.95) as usize).min(count - 1);
        Some(Self {
            min: sorted[0],
            mean: sorted.iter().sum::<f64>() / count as f64,
            max: sorted[count - 1],
            p95: sorted[p95_idx],
            count,
        })
    }

    /// Check whether every sample lies in [0, 1]
    pub fn is_unit_bounded(&self) -> bool {
        self.min >= 0.0 && self.max <= 1.0
    }
}

/// Which HSI distance to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Raw,
    Normalized,
}

/// Measure the distance between consecutive pairs of `colors`
pub fn consecutive_distances(colors: &[Rgb], metric: Metric) -> Result<Vec<f64>> {
    colors
        .windows(2)
        .map(|pair| {
            let a = Hsi::from_rgb(pair[0].r, pair[0].g, pair[0].b)?;
            let b = Hsi::from_rgb(pair[1].r, pair[1].g, pair[1].b)?;
            match metric {
                Metric::Raw => a.distance(&b),
                Metric::Normalized => a.normalized_distance(&b),
            }
        })
        .collect()
}
