use lightcast::{Light, LightColor, Point, Wall};

/// Build a light with explicit geometry and a warm white tint.
#[allow(dead_code)]
pub fn test_light(x: f32, y: f32, range: f32, ray_count: usize) -> Light {
    Light::new(x, y, LightColor::WarmWhite, range, ray_count, 14.0)
}

/// Build a user wall from raw coordinates.
#[allow(dead_code)]
pub fn wall(ax: f32, ay: f32, bx: f32, by: f32) -> Wall {
    Wall::new(Point::new(ax, ay), Point::new(bx, by))
}

/// Assert two scalars agree within `eps`, with a labelled failure.
#[allow(dead_code)]
pub fn assert_close(actual: f32, expected: f32, eps: f32, what: &str) {
    assert!(
        (actual - expected).abs() <= eps,
        "{}: expected {} but got {}",
        what,
        expected,
        actual
    );
}
