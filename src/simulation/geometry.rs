//! Geometry calculations for range and line-of-sight between entities.
//!
//! Contains helper functions for:
//! - Converting an (angle, height) pair into planar coordinates
//! - Straight-line distance between two entities
//! - Segment vs. reference body intersection (line-of-sight)
//!
//! All entities live on a single plane through the centre of the reference
//! body (Jupiter). Heights are measured from the body centre in kilometres, so
//! a ground device sits at exactly [`RADIUS_OF_JUPITER`].

use super::angle::Angle;

/// Radius of the reference body in kilometres.
pub const RADIUS_OF_JUPITER: f64 = 69_911.0;

/// Relative tolerance applied when deciding whether a segment grazes the
/// body surface. Points within this fraction of the radius count as outside.
const SURFACE_TOLERANCE: f64 = 1e-9;

/// Simple 2D point in kilometres, origin at the body centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Planar position of an entity at `angle` and `height` from the body centre.
    pub fn from_polar(angle: Angle, height: f64) -> Self {
        let theta = angle.radians();
        Point {
            x: height * theta.cos(),
            y: height * theta.sin(),
        }
    }
}

/// Squared Euclidean distance in kilometres².
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Straight-line distance (km) between two entities given by angle and height.
pub fn distance(position_a: Angle, height_a: f64, position_b: Angle, height_b: f64) -> f64 {
    let a = Point::from_polar(position_a, height_a);
    let b = Point::from_polar(position_b, height_b);
    distance2(&a, &b).sqrt()
}

/// Line-of-sight test between two entities.
///
/// Returns `true` when the straight segment between the two positions stays
/// outside the reference body. Endpoints resting on the surface (ground
/// devices) do not block their own line of sight; the body only obstructs the
/// link when the segment dips below the surface between the endpoints.
///
/// Distance plays no part here; pair this with [`distance`] and the querying
/// entity's range to decide whether two entities are in range.
pub fn is_visible(position_a: Angle, height_a: f64, position_b: Angle, height_b: f64) -> bool {
    let a = Point::from_polar(position_a, height_a);
    let b = Point::from_polar(position_b, height_b);
    !segment_enters_body(&a, &b, RADIUS_OF_JUPITER)
}

// ---------- Geometry helpers ----------

/// Strict point-inside-body test with surface tolerance.
fn point_inside_body(p: &Point, radius: f64) -> bool {
    let origin = Point { x: 0.0, y: 0.0 };
    distance2(p, &origin) < radius * radius * (1.0 - SURFACE_TOLERANCE)
}

/// Segment vs. body (circle centred at the origin) using projection.
///
/// The closest point of the segment to the centre is found by projecting the
/// centre onto the segment's line. If the projection falls outside the open
/// interval `(0, 1)` the closest point is an endpoint, and endpoints are only
/// treated as obstructed when they lie strictly inside the body.
fn segment_enters_body(p1: &Point, p2: &Point, radius: f64) -> bool {
    if point_inside_body(p1, radius) || point_inside_body(p2, radius) {
        return true;
    }

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let length2 = dx * dx + dy * dy;
    if length2 == 0.0 {
        return false;
    }

    let t = (-p1.x * dx - p1.y * dy) / length2;
    if t <= 0.0 || t >= 1.0 {
        return false;
    }

    let closest = Point {
        x: p1.x + t * dx,
        y: p1.y + t * dy,
    };
    point_inside_body(&closest, radius)
}
