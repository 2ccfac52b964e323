//! Plain numeric series for chart rendering.
//!
//! The models emit ordered `(x, y)` pairs only; rendering belongs to an
//! external plotting collaborator, so nothing here depends on a charting
//! library API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single point of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Horizontal coordinate (quantity, arrival rate, ...).
    pub x: f64,
    /// Vertical coordinate (cost, wait time, ...).
    pub y: f64,
}

/// An ordered sequence of sample points with a name for the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Series name.
    name: String,
    /// Ordered data points.
    points: Vec<SamplePoint>,
}

impl Series {
    /// Create an empty series.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Sample a function over a grid of x values.
    #[must_use]
    pub fn sample(name: impl Into<String>, grid: &[f64], f: impl Fn(f64) -> f64) -> Self {
        let points = grid.iter().map(|&x| SamplePoint { x, y: f(x) }).collect();
        Self {
            name: name.into(),
            points,
        }
    }

    /// Append a point.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push(SamplePoint { x, y });
    }

    /// Get series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all points.
    #[must_use]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Get number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get minimum y value.
    #[must_use]
    pub fn min_y(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.y)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get maximum y value.
    #[must_use]
    pub fn max_y(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.y)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the point with the smallest y value.
    #[must_use]
    pub fn min_point(&self) -> Option<SamplePoint> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the x range covered by the series.
    #[must_use]
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.x;
        let last = self.points.last()?.x;
        Some((first, last))
    }
}

/// Sampling options shared by the curve-producing models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ChartOptions {
    /// Number of samples per curve.
    #[validate(range(min = 2, max = 10_000))]
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_samples() -> usize {
    40
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            samples: default_samples(),
        }
    }
}

/// Grid of `samples` evenly spaced values over `(0, end]`.
///
/// Zero is structurally excluded; the first sample sits at `end / samples`.
#[must_use]
pub fn open_grid(end: f64, samples: usize) -> Vec<f64> {
    (1..=samples)
        .map(|k| end * (k as f64) / (samples as f64))
        .collect()
}

/// Grid of `samples` evenly spaced values over `[0, end)`.
///
/// The endpoint is structurally excluded; the last sample sits at
/// `end * (samples - 1) / samples`.
#[must_use]
pub fn half_open_grid(end: f64, samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|k| end * (k as f64) / (samples as f64))
        .collect()
}

/// Grid of values `0, step, 2·step, ...` up to and including `end`
/// (within floating tolerance). Requires `step > 0` from the caller.
#[must_use]
pub fn stepped_grid(end: f64, step: f64) -> Vec<f64> {
    let count = (end / step).floor() as usize;
    let mut grid: Vec<f64> = (0..=count).map(|k| step * (k as f64)).collect();
    // Close the range when the last step undershoots the endpoint.
    if let Some(&last) = grid.last() {
        if end - last > step * 1e-9 {
            grid.push(end);
        }
    }
    grid
}
