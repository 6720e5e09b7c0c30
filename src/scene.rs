// src/scene.rs
//! A flat collection of points and segments, as a road editor would hand them over.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::{Point, Segment};
use crate::utils::geometry::{get_all_intersections, get_nearest_point, get_nearest_segment, Intersection};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl Scene {
    pub fn from_json(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text)?;
        debug!("parsed scene: {} points, {} segments", scene.points.len(), scene.segments.len());
        Ok(scene)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading scene from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// A small crossroads used when no scene file is given.
    pub fn sample() -> Self {
        let p = |x, y| Point::new(x, y);
        Scene {
            points: vec![p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 100.0)],
            segments: vec![
                Segment::new(p(0.0, 0.0), p(100.0, 0.0)),
                Segment::new(p(100.0, 0.0), p(100.0, 100.0)),
                Segment::new(p(0.0, 100.0), p(100.0, 0.0)),
                Segment::new(p(0.0, 0.0), p(100.0, 100.0)),
            ],
        }
    }

    pub fn snap_point(&self, loc: &Point, threshold: Option<f64>) -> Option<&Point> {
        get_nearest_point(loc, &self.points, threshold)
    }

    pub fn snap_segment(&self, loc: &Point, threshold: Option<f64>) -> Option<&Segment> {
        get_nearest_segment(loc, &self.segments, threshold)
    }

    /// Crossings of `segment` with the other segments of the scene, nearest its
    /// start first. The segment itself and segments joined to it at an endpoint
    /// are left out, so junctions are not reported as crossings.
    pub fn crossings(&self, segment: &Segment) -> Vec<Intersection> {
        let others: Vec<Segment> = self
            .segments
            .iter()
            .filter(|o| !o.equals(segment) && !o.includes(&segment.start) && !o.includes(&segment.end))
            .copied()
            .collect();
        get_all_intersections(segment, &others)
    }
}
