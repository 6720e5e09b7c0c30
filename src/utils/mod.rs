// src/utils/mod.rs
pub mod color;
pub mod geometry;
pub mod projection;
pub mod util;

pub use color::{get_random_color, Hsl};
pub use geometry::{get_intersection, get_nearest_point, get_nearest_segment, Intersection};
pub use projection::{get_fake3d_point, ProjectionConfig};
pub use util::{deg_to_rad, inv_lerp, lerp};
