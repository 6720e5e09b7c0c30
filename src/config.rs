// src/config.rs
//! Settings for the demo binary, read from a JSON file.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::Point;
use crate::utils::ProjectionConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub projection: ProjectionConfig,
    /// Snapping radius for nearest point/segment lookups; absent means unlimited.
    pub snap_threshold: Option<f64>,
    pub view_point: Point,
    pub cursor: Point,
    pub building_height: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            snap_threshold: Some(10.0),
            view_point: Point::ORIGIN,
            cursor: Point::ORIGIN,
            building_height: 50.0,
        }
    }
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg = DemoConfig::from_json(r#"{"cursor": {"x": 4.0, "y": 2.0}}"#).unwrap();
        assert_eq!(cfg.cursor, Point::new(4.0, 2.0));
        assert_eq!(cfg.snap_threshold, Some(10.0));
        assert_eq!(cfg.projection.falloff, 300.0);
    }

    #[test]
    fn test_null_threshold_means_unlimited() {
        let cfg = DemoConfig::from_json(r#"{"snap_threshold": null, "projection": {"falloff": 120}}"#).unwrap();
        assert_eq!(cfg.snap_threshold, None);
        assert_eq!(cfg.projection.falloff, 120.0);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(DemoConfig::from_json("{ nope"), Err(GeometryError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            DemoConfig::load("/definitely/not/here/config.json"),
            Err(GeometryError::Io(_))
        ));
    }
}
