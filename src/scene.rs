use crate::geometry::{distance_to_segment, Point, Wall};
use crate::light::{Light, LightColor};

/// Pointer distance under which a wall counts as hovered, in pixels.
pub const WALL_HIT_THRESHOLD: f32 = 15.0;

/// Defaults applied to lights created through the scene.
#[derive(Debug, Clone, Copy)]
pub struct LightDefaults {
    pub range: f32,
    pub ray_count: usize,
    pub radius: f32,
}

impl Default for LightDefaults {
    fn default() -> Self {
        Self {
            range: 600.0,
            ray_count: 1000,
            radius: 14.0,
        }
    }
}

/// What the pointer is over. Lights take precedence over walls; the index
/// points into the matching scene collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneObject {
    Light(usize),
    Wall(usize),
}

/// The mutable scene: viewport size, lights, and walls (the four boundary
/// walls framing the viewport plus any user-drawn ones). Owned by the
/// caller and passed into the visibility computation; no globals.
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub lights: Vec<Light>,
    pub walls: Vec<Wall>,
    defaults: LightDefaults,
    wall_threshold: f32,
    color_cursor: usize,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_defaults(width, height, LightDefaults::default(), WALL_HIT_THRESHOLD)
    }

    pub fn with_defaults(
        width: f32,
        height: f32,
        defaults: LightDefaults,
        wall_threshold: f32,
    ) -> Self {
        let mut scene = Scene {
            width,
            height,
            lights: Vec::new(),
            walls: Vec::new(),
            defaults,
            wall_threshold,
            color_cursor: 0,
        };
        scene.rebuild_boundary();
        scene
    }

    pub fn light_defaults(&self) -> LightDefaults {
        self.defaults
    }

    /// Drop the old boundary walls and frame the current viewport with a
    /// fresh closed rectangle (top, right, bottom, left).
    fn rebuild_boundary(&mut self) {
        self.walls.retain(|w| !w.is_boundary);

        let (w, h) = (self.width, self.height);
        self.walls.push(Wall::boundary(Point::new(0.0, 0.0), Point::new(w, 0.0)));
        self.walls.push(Wall::boundary(Point::new(w, 0.0), Point::new(w, h)));
        self.walls.push(Wall::boundary(Point::new(w, h), Point::new(0.0, h)));
        self.walls.push(Wall::boundary(Point::new(0.0, h), Point::new(0.0, 0.0)));
    }

    /// Add a light at `p` with the next color in the cycle and the scene's
    /// configured defaults. Rejected as a silent no-op when `p` falls inside
    /// an existing light's hit disc; the color cycle only advances on
    /// success. Returns whether the light was added.
    pub fn add_light(&mut self, p: Point) -> bool {
        if self.lights.iter().any(|light| light.contains(p)) {
            return false;
        }

        let color = LightColor::CYCLE[self.color_cursor % LightColor::CYCLE.len()];
        self.color_cursor += 1;

        self.lights.push(Light::new(
            p.x,
            p.y,
            color,
            self.defaults.range,
            self.defaults.ray_count,
            self.defaults.radius,
        ));
        true
    }

    /// Move a light to `p`. Unconditional; no collision checks against
    /// walls or the viewport.
    pub fn move_light(&mut self, index: usize, p: Point) {
        if let Some(light) = self.lights.get_mut(index) {
            light.x = p.x;
            light.y = p.y;
        }
    }

    /// Add a user wall from `a` to `b`.
    pub fn add_wall(&mut self, a: Point, b: Point) {
        self.walls.push(Wall::new(a, b));
    }

    /// Hit-test the pointer position: lights first (disc test), then
    /// non-boundary walls (clamped point-to-segment distance under the
    /// threshold). First match wins; boundary walls are never reported.
    pub fn hovered_object(&self, p: Point) -> Option<SceneObject> {
        for (i, light) in self.lights.iter().enumerate() {
            if light.contains(p) {
                return Some(SceneObject::Light(i));
            }
        }

        for (i, wall) in self.walls.iter().enumerate() {
            if wall.is_boundary {
                continue;
            }
            if distance_to_segment(p, wall.a, wall.b) < self.wall_threshold {
                return Some(SceneObject::Wall(i));
            }
        }

        None
    }

    /// Delete the light or wall under the pointer, if any. Returns what was
    /// removed. Boundary walls are never eligible.
    pub fn delete_at(&mut self, p: Point) -> Option<SceneObject> {
        let hit = self.hovered_object(p)?;
        match hit {
            SceneObject::Light(i) => {
                self.lights.remove(i);
            }
            SceneObject::Wall(i) => {
                self.walls.remove(i);
            }
        }
        Some(hit)
    }

    /// Resize the viewport. Only the four boundary walls are regenerated;
    /// lights and user walls keep their absolute coordinates.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild_boundary();
    }

    /// User-drawn walls only, in insertion order.
    pub fn user_walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(|w| !w.is_boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_has_exactly_four_boundary_walls() {
        let scene = Scene::new(800.0, 600.0);
        assert_eq!(scene.walls.len(), 4);
        assert!(scene.walls.iter().all(|w| w.is_boundary));
        assert_eq!(scene.user_walls().count(), 0);
    }

    #[test]
    fn test_add_light_rejects_stacked_duplicate() {
        let mut scene = Scene::new(800.0, 600.0);
        assert!(scene.add_light(Point::new(100.0, 100.0)));
        assert!(!scene.add_light(Point::new(105.0, 105.0)));
        assert_eq!(scene.lights.len(), 1);

        // The color cycle only advances on successful adds.
        assert!(scene.add_light(Point::new(300.0, 300.0)));
        assert_eq!(scene.lights[1].color, LightColor::CYCLE[1]);
    }

    #[test]
    fn test_boundary_walls_never_deletable() {
        let mut scene = Scene::new(800.0, 600.0);
        // Right on top of the upper boundary wall.
        assert_eq!(scene.delete_at(Point::new(400.0, 0.0)), None);
        assert_eq!(scene.walls.len(), 4);
    }

    #[test]
    fn test_lights_take_hover_precedence_over_walls() {
        let mut scene = Scene::new(800.0, 600.0);
        scene.add_wall(Point::new(50.0, 100.0), Point::new(150.0, 100.0));
        scene.add_light(Point::new(100.0, 100.0));

        assert_eq!(
            scene.hovered_object(Point::new(100.0, 100.0)),
            Some(SceneObject::Light(0))
        );
    }
}
