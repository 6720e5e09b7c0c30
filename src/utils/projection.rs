// src/utils/projection.rs
//! Pseudo-3D lift used to draw buildings and trees with apparent height in a
//! top-down view.

use serde::{Deserialize, Serialize};

use super::geometry::{add, distance, normalize, scale, subtract};
use crate::primitives::Point;

/// Distance at which the lift reaches half of `height`.
pub const DEFAULT_FALLOFF: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub falloff: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { falloff: DEFAULT_FALLOFF }
    }
}

impl ProjectionConfig {
    /// Pushes `point` away from `view_point` by `height` times a weight in
    /// `[0, 1)` that grows with distance as `atan(dist / falloff) / (π/2)`.
    ///
    /// `point == view_point` has no direction and yields NaN.
    pub fn project(&self, point: &Point, view_point: &Point, height: f64) -> Point {
        let dir = normalize(&subtract(point, view_point));
        let dist = distance(point, view_point);
        let scaler = (dist / self.falloff).atan() / std::f64::consts::FRAC_PI_2;
        add(point, &scale(&dir, height * scaler))
    }
}

pub fn get_fake3d_point(point: &Point, view_point: &Point, height: f64) -> Point {
    ProjectionConfig::default().project(point, view_point, height)
}
