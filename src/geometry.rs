use serde::{Deserialize, Serialize};

/// A position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Straight-line distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A unit direction vector. Zero-length (or non-finite) input is rejected
/// at construction so the ray caster never sees NaN components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub x: f32,
    pub y: f32,
}

impl Direction {
    /// Normalize an arbitrary vector into a direction.
    pub fn new(x: f32, y: f32) -> Option<Self> {
        let len = x.hypot(y);
        if !len.is_finite() || len < 1e-12 {
            return None;
        }
        Some(Direction {
            x: x / len,
            y: y / len,
        })
    }

    /// Direction at `angle` radians, measured from +x toward +y.
    pub fn from_angle(angle: f32) -> Self {
        Direction {
            x: angle.cos(),
            y: angle.sin(),
        }
    }
}

/// An occluding line segment. The four `is_boundary` walls frame the
/// viewport; they are regenerated on every resize and are not user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub a: Point,
    pub b: Point,
    #[serde(default)]
    pub is_boundary: bool,
}

impl Wall {
    /// A user-created wall.
    pub fn new(a: Point, b: Point) -> Self {
        Wall {
            a,
            b,
            is_boundary: false,
        }
    }

    /// One edge of the viewport frame.
    pub fn boundary(a: Point, b: Point) -> Self {
        Wall {
            a,
            b,
            is_boundary: true,
        }
    }
}

/// A valid ray/segment intersection. `t` is the distance along the ray
/// direction in ray-length units (not normalized to the segment).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Point,
    pub t: f32,
}

/// Denominator cutoff below which a ray and segment count as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Intersect a ray (`origin + t*dir`, t >= 0, unbounded) with the segment
/// `a..b` (both endpoints inclusive).
///
/// Solves the 2x2 system in determinant form. Parallel and degenerate
/// segments report no intersection; absence is the expected outcome for
/// most ray/wall pairs, not an error.
pub fn ray_segment_intersection(origin: Point, dir: Direction, a: Point, b: Point) -> Option<Hit> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let denominator = dir.x * dy - dir.y * dx;
    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((a.x - origin.x) * dy - (a.y - origin.y) * dx) / denominator;
    let u = ((a.x - origin.x) * dir.y - (a.y - origin.y) * dir.x) / denominator;

    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        return Some(Hit {
            point: Point::new(origin.x + dir.x * t, origin.y + dir.y * t),
            t,
        });
    }

    None
}

/// Distance from `p` to the closest point on the finite segment `a..b`
/// (projection parameter clamped to [0,1], not the infinite line).
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance(proj)
}
