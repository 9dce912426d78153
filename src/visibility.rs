use crate::geometry::{ray_segment_intersection, Direction, Hit, Point, Wall};
use crate::light::Light;

/// One ordered sample of the visibility boundary around a light.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityPoint {
    pub point: Point,
    pub angle: f32,
}

/// Compute the visibility polygon for one light against the full wall set.
///
/// Casts `light.ray_count` rays at uniformly spaced angles `2*pi*i/ray_count`
/// starting at 0 (+x). Each ray keeps the nearest hit by `t`; if the nearest
/// hit lies beyond `range` (or nothing was hit), the ray terminates at
/// `origin + dir * range` instead. Returns exactly `ray_count` points sorted
/// ascending by angle; a zero ray count yields an empty polygon.
pub fn visibility_polygon(light: &Light, walls: &[Wall]) -> Vec<VisibilityPoint> {
    let origin = light.position();
    let mut points = Vec::with_capacity(light.ray_count);

    for i in 0..light.ray_count {
        let angle = i as f32 / light.ray_count as f32 * std::f32::consts::PI * 2.0;
        let dir = Direction::from_angle(angle);

        // Linear scan over every wall, boundary and user walls alike.
        let mut closest: Option<Hit> = None;
        for wall in walls {
            if let Some(hit) = ray_segment_intersection(origin, dir, wall.a, wall.b) {
                if closest.map_or(true, |c| hit.t < c.t) {
                    closest = Some(hit);
                }
            }
        }

        let point = match closest {
            Some(hit) if hit.t <= light.range => hit.point,
            _ => Point::new(origin.x + dir.x * light.range, origin.y + dir.y * light.range),
        };

        points.push(VisibilityPoint { point, angle });
    }

    // Generation order already ascends in angle; the sort is kept as part of
    // the contract so a well-formed polygon never depends on that order.
    points.sort_by(|a, b| a.angle.total_cmp(&b.angle));

    points
}
