// src/lib.rs
//! 2D vector, segment and projection helpers for road and traffic editors.

pub mod config;
pub mod error;
pub mod primitives;
pub mod scene;
pub mod utils;

pub use error::{GeometryError, Result};
pub use primitives::{DistanceToPoint, Point, Segment};
