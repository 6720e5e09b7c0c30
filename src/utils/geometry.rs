// src/utils/geometry.rs
//! Point arithmetic, nearest-neighbour search and segment intersection.
//!
//! Every function here is pure and returns fresh values. Degenerate input is not
//! guarded: `normalize` of a zero vector yields NaN components, and the nearest
//! searches return `None` rather than failing.

use log::trace;
use serde::{Deserialize, Serialize};

use super::util::lerp;
use crate::primitives::{DistanceToPoint, Point, Segment};

/// Denominators at or below this magnitude are treated as parallel lines.
pub const INTERSECTION_EPSILON: f64 = 0.001;

/// Where two segments cross, and how far along the first one that happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub point: Point,
    /// Parameter along the first segment, 0 at its start and 1 at its end.
    pub offset: f64,
}

/// Single pass keeping the first item that is strictly closer than both the
/// running minimum and the threshold.
fn nearest_by<'a, T, F>(items: &'a [T], threshold: Option<f64>, mut dist: F) -> Option<&'a T>
where
    F: FnMut(&T) -> f64,
{
    let threshold = threshold.unwrap_or(f64::INFINITY);
    let mut min_dist = f64::INFINITY;
    let mut nearest = None;
    for item in items {
        let d = dist(item);
        if d < min_dist && d < threshold {
            min_dist = d;
            nearest = Some(item);
        }
    }
    nearest
}

/// Returns the point of `points` closest to `loc`.
///
/// Only points strictly closer than `threshold` qualify; `None` means no limit.
/// On ties the earliest point wins.
///
/// ```
/// use road_geometry::primitives::Point;
/// use road_geometry::utils::geometry::get_nearest_point;
///
/// let points = [Point::new(1.0, 0.0), Point::new(5.0, 0.0)];
/// assert_eq!(get_nearest_point(&Point::ORIGIN, &points, None), Some(&points[0]));
/// assert_eq!(get_nearest_point(&Point::ORIGIN, &points[1..], Some(5.0)), None);
/// ```
pub fn get_nearest_point<'a>(loc: &Point, points: &'a [Point], threshold: Option<f64>) -> Option<&'a Point> {
    nearest_by(points, threshold, |p| distance(p, loc))
}

/// Same search as [`get_nearest_point`], ranking by each segment's own
/// point distance.
pub fn get_nearest_segment<'a, S: DistanceToPoint>(
    loc: &Point,
    segments: &'a [S],
    threshold: Option<f64>,
) -> Option<&'a S> {
    nearest_by(segments, threshold, |s| s.distance_to_point(loc))
}

pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

pub fn average(p1: &Point, p2: &Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

pub fn dot(p1: &Point, p2: &Point) -> f64 {
    p1.x * p2.x + p1.y * p2.y
}

pub fn add(p1: &Point, p2: &Point) -> Point {
    Point::new(p1.x + p2.x, p1.y + p2.y)
}

pub fn subtract(p1: &Point, p2: &Point) -> Point {
    Point::new(p1.x - p2.x, p1.y - p2.y)
}

pub fn scale(p: &Point, scaler: f64) -> Point {
    Point::new(p.x * scaler, p.y * scaler)
}

/// Unit vector in the direction of `p`. A zero vector gives NaN components.
pub fn normalize(p: &Point) -> Point {
    scale(p, 1.0 / magnitude(p))
}

pub fn magnitude(p: &Point) -> f64 {
    p.x.hypot(p.y)
}

/// Rotates `p` a quarter turn counter-clockwise.
pub fn perpendicular(p: &Point) -> Point {
    Point::new(-p.y, p.x)
}

/// Moves `loc` by `offset` units along the heading `angle` (radians).
pub fn translate(loc: &Point, angle: f64, offset: f64) -> Point {
    Point::new(loc.x + angle.cos() * offset, loc.y + angle.sin() * offset)
}

/// Signed angle of `p` measured from the positive x axis, in `(-π, π]`.
pub fn angle(p: &Point) -> f64 {
    p.y.atan2(p.x)
}

pub fn lerp2d(a: &Point, b: &Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Intersects segment AB with segment CD.
///
/// Parallel and collinear pairs (denominator within [`INTERSECTION_EPSILON`])
/// report no intersection, even when they overlap. Endpoints count as inside.
///
/// ```
/// use road_geometry::primitives::Point;
/// use road_geometry::utils::geometry::get_intersection;
///
/// let hit = get_intersection(
///     &Point::new(0.0, 0.0),
///     &Point::new(2.0, 2.0),
///     &Point::new(0.0, 2.0),
///     &Point::new(2.0, 0.0),
/// )
/// .unwrap();
/// assert_eq!(hit.point, Point::new(1.0, 1.0));
/// assert_eq!(hit.offset, 0.5);
/// ```
pub fn get_intersection(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<Intersection> {
    let t_top = (d.x - c.x) * (a.y - c.y) - (d.y - c.y) * (a.x - c.x);
    let u_top = (c.y - a.y) * (a.x - b.x) - (c.x - a.x) * (a.y - b.y);
    let bottom = (d.y - c.y) * (b.x - a.x) - (d.x - c.x) * (b.y - a.y);

    if bottom.abs() <= INTERSECTION_EPSILON {
        trace!("segments {:?}-{:?} and {:?}-{:?} are parallel", a, b, c, d);
        return None;
    }

    let t = t_top / bottom;
    let u = u_top / bottom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Intersection {
            point: Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)),
            offset: t,
        })
    } else {
        None
    }
}

/// Every crossing of `segment` with `others`, ordered by offset along `segment`.
pub fn get_all_intersections(segment: &Segment, others: &[Segment]) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = others
        .iter()
        .filter_map(|o| get_intersection(&segment.start, &segment.end, &o.start, &o.end))
        .collect();
    hits.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    hits
}
