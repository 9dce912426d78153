use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Tint tags cycled for successive lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightColor {
    WarmWhite,
    CoolBlue,
    Pink,
    Green,
    Amber,
    Violet,
}

impl LightColor {
    /// Cycle order for newly added lights.
    pub const CYCLE: [LightColor; 6] = [
        LightColor::WarmWhite,
        LightColor::CoolBlue,
        LightColor::Pink,
        LightColor::Green,
        LightColor::Amber,
        LightColor::Violet,
    ];

    /// Base tint as 0-255 RGB; the renderer applies the radial alpha.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            LightColor::WarmWhite => (255, 240, 180),
            LightColor::CoolBlue => (180, 220, 255),
            LightColor::Pink => (255, 180, 200),
            LightColor::Green => (180, 255, 180),
            LightColor::Amber => (255, 200, 100),
            LightColor::Violet => (200, 180, 255),
        }
    }
}

/// A point light. Position is mutable (drag); `range` and `ray_count` are
/// fixed at creation. `radius` is the pointer hit-test disc and is
/// independent of `range`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Light {
    pub x: f32,
    pub y: f32,
    pub color: LightColor,
    pub range: f32,
    #[serde(rename = "rays")]
    pub ray_count: usize,
    pub radius: f32,
}

impl Light {
    /// Create a light. `ray_count` is clamped to at least 1.
    pub fn new(x: f32, y: f32, color: LightColor, range: f32, ray_count: usize, radius: f32) -> Self {
        Light {
            x,
            y,
            color,
            range,
            ray_count: ray_count.max(1),
            radius,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Disc test for pointer interaction.
    pub fn contains(&self, p: Point) -> bool {
        self.position().distance(p) <= self.radius
    }
}
