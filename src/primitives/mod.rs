// src/primitives/mod.rs
pub mod point;
pub mod segment;

pub use point::Point;
pub use segment::Segment;

/// Anything that can report its minimum distance to a point.
///
/// `get_nearest_segment` searches over this, so callers can rank their own
/// road or lane types without first converting them to `Segment`.
pub trait DistanceToPoint {
    fn distance_to_point(&self, point: &Point) -> f64;
}

impl DistanceToPoint for Point {
    fn distance_to_point(&self, point: &Point) -> f64 {
        self.distance_to(point)
    }
}

impl DistanceToPoint for Segment {
    fn distance_to_point(&self, point: &Point) -> f64 {
        Segment::distance_to_point(self, point)
    }
}

impl<T: DistanceToPoint + ?Sized> DistanceToPoint for &T {
    fn distance_to_point(&self, point: &Point) -> f64 {
        (**self).distance_to_point(point)
    }
}
