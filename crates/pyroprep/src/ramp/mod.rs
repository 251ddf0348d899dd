//! Piecewise-linear color ramps and baked lookup tables.
//!
//! A [`ColorRamp`] maps a scalar temperature fraction in `[0, 1]` to an RGB
//! color by interpolating between ordered control points. Render-time lookups
//! go through a [`ColorTable`] baked once with [`ColorRamp::build_table`]
//! instead of re-interpolating per sample.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One knot of a ramp: the fraction where a color is reached.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    /// Fraction in `[0, 1]` at which `color` applies exactly.
    pub threshold: f32,
    /// RGB color, pre-scaled by any emissive-brightness multiplier.
    pub color: Vec3,
}

impl ControlPoint {
    pub fn new(threshold: f32, color: Vec3) -> Self {
        Self { threshold, color }
    }
}

/// An ordered sequence of control points with strictly increasing thresholds.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    points: Vec<ControlPoint>,
}

impl ColorRamp {
    /// Builds a ramp from control points, validating them eagerly.
    ///
    /// Fails with [`Error::InvalidControlPoints`] if the list is empty, a
    /// threshold is not finite, or thresholds are not strictly increasing.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidControlPoints(
                "control point list is empty".to_owned(),
            ));
        }
        for point in &points {
            if !point.threshold.is_finite() {
                return Err(Error::InvalidControlPoints(format!(
                    "threshold {} is not finite",
                    point.threshold
                )));
            }
        }
        for pair in points.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(Error::InvalidControlPoints(format!(
                    "thresholds {} and {} are not strictly increasing",
                    pair[0].threshold, pair[1].threshold
                )));
            }
        }
        Ok(Self { points })
    }

    /// The reference fire ramp: black up to 0.1, a dim red by 0.15, a bright
    /// yellow by 0.42, saturating to a bright white at 0.45.
    ///
    /// The red/yellow/white colors carry emissive-brightness multipliers of
    /// 18, 63 and 80 baked into their components, so they are render-unit
    /// intensities rather than displayable 0-255 values.
    pub fn fire_default() -> Self {
        let black = Vec3::ZERO;
        let red = Vec3::new(178.0, 34.0, 34.0) * (18.0 / 255.0);
        let yellow = Vec3::new(238.0, 230.0, 53.0) * (63.0 / 255.0);
        let white = Vec3::splat(255.0) * (80.0 / 255.0);
        Self {
            points: vec![
                ControlPoint::new(0.1, black),
                ControlPoint::new(0.15, red),
                ControlPoint::new(0.42, yellow),
                ControlPoint::new(0.45, white),
            ],
        }
    }

    /// The control points, in threshold order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Color for fraction `t`.
    ///
    /// Below the first threshold the first color applies; at or above the
    /// last threshold the last color applies. In between, `t` falls into the
    /// unique segment with `t_lo <= t < t_hi` (each exact threshold belongs
    /// to the segment above it) and is interpolated linearly.
    pub fn color_at(&self, t: f32) -> Vec3 {
        if t < self.points[0].threshold {
            return self.points[0].color;
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t < hi.threshold {
                let u = (t - lo.threshold) / (hi.threshold - lo.threshold);
                return lo.color.lerp(hi.color, u);
            }
        }
        self.points[self.points.len() - 1].color
    }

    /// Bakes the ramp into a `size`-entry table where entry `i` holds the
    /// color for fraction `i / size`.
    pub fn build_table(&self, size: usize) -> ColorTable {
        debug!(size, points = self.points.len(), "baking color table");
        let data = (0..size)
            .map(|i| self.color_at(i as f32 / size as f32))
            .collect();
        ColorTable { data }
    }
}

/// A baked color lookup table, ordered by quantized fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    pub data: Vec<Vec3>,
}

impl ColorTable {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
