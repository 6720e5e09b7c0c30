// src/primitives/segment.rs
use serde::{Deserialize, Serialize};

use super::Point;
use crate::utils::geometry::{add, angle, average, dot, scale, subtract};
use crate::utils::util::clamp;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        average(&self.start, &self.end)
    }

    /// Heading of the segment from `start` to `end`, in radians.
    pub fn direction_angle(&self) -> f64 {
        angle(&subtract(&self.end, &self.start))
    }

    /// Closest point on the segment to `point`, with its parameter along the
    /// segment clamped to `[0, 1]`.
    pub fn closest_point(&self, point: &Point) -> (Point, f64) {
        let dir = subtract(&self.end, &self.start);
        let len_sq = dot(&dir, &dir);
        if len_sq == 0.0 {
            return (self.start, 0.0);
        }

        let t = clamp(dot(&subtract(point, &self.start), &dir) / len_sq, 0.0, 1.0);
        (add(&self.start, &scale(&dir, t)), t)
    }

    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let (closest, _) = self.closest_point(point);
        point.distance_to(&closest)
    }

    /// True when both segments share the same endpoints, in either order.
    pub fn equals(&self, other: &Segment) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    pub fn includes(&self, point: &Point) -> bool {
        self.start == *point || self.end == *point
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Segment::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::FRAC_PI_2;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_distance_perpendicular_foot() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.distance_to_point(&Point::new(5.0, 5.0)), 5.0);
    }

    #[test]
    fn test_distance_beyond_endpoint() {
        // Past the end the nearest feature is the endpoint, not the infinite line.
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_approx_eq!(s.distance_to_point(&Point::new(13.0, 4.0)), 5.0);
        assert_approx_eq!(s.distance_to_point(&Point::new(-3.0, -4.0)), 5.0);
    }

    #[test]
    fn test_zero_length_segment() {
        let s = seg(1.0, 1.0, 1.0, 1.0);
        let (closest, t) = s.closest_point(&Point::new(4.0, 5.0));
        assert_eq!(closest, Point::new(1.0, 1.0));
        assert_eq!(t, 0.0);
        assert_approx_eq!(s.distance_to_point(&Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_closest_point_parameter() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        let (closest, t) = s.closest_point(&Point::new(1.0, 3.0));
        assert_eq!(closest, Point::new(1.0, 0.0));
        assert_approx_eq!(t, 0.25);
    }

    #[test]
    fn test_equals_ignores_direction() {
        let a = seg(0.0, 0.0, 1.0, 2.0);
        let b = seg(1.0, 2.0, 0.0, 0.0);
        assert!(a.equals(&b));
        assert!(!a.equals(&seg(0.0, 0.0, 1.0, 3.0)));
    }

    #[test]
    fn test_equals_zero_length_is_symmetric() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let dot = seg(0.0, 0.0, 0.0, 0.0);
        assert!(!a.equals(&dot));
        assert!(!dot.equals(&a));
        assert!(dot.equals(&dot));
    }

    #[test]
    fn test_from_point_pair() {
        let s = Segment::from((Point::new(1.0, 2.0), Point::new(3.0, 4.0)));
        assert_eq!(s, seg(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_length_midpoint_angle() {
        let s = seg(0.0, 0.0, 0.0, 4.0);
        assert_eq!(s.length(), 4.0);
        assert_eq!(s.midpoint(), Point::new(0.0, 2.0));
        assert_approx_eq!(s.direction_angle(), FRAC_PI_2);
    }
}
