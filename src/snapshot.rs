use crate::geometry::Wall;
use crate::light::Light;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};

/// A shareable capture of the scene: viewport size, lights, and user walls.
/// Boundary walls are regenerated on restore rather than stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub width: f32,
    pub height: f32,
    pub lights: Vec<Light>,
    pub walls: Vec<Wall>,
}

impl SceneSnapshot {
    pub fn from_scene(scene: &Scene) -> Self {
        SceneSnapshot {
            width: scene.width,
            height: scene.height,
            lights: scene.lights.clone(),
            walls: scene.user_walls().copied().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the scene's lights and user walls with the snapshot's. The
    /// live viewport wins over the stored size, so the boundary frame is
    /// left untouched.
    pub fn apply(&self, scene: &mut Scene) {
        scene.lights = self.lights.clone();
        scene.walls.retain(|w| w.is_boundary);
        scene
            .walls
            .extend(self.walls.iter().copied().map(|mut w| {
                w.is_boundary = false;
                w
            }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_snapshot_round_trip_keeps_user_state_only() {
        let mut scene = Scene::new(800.0, 600.0);
        scene.add_light(Point::new(200.0, 150.0));
        scene.add_wall(Point::new(100.0, 100.0), Point::new(500.0, 120.0));

        let json = SceneSnapshot::from_scene(&scene).to_json().unwrap();
        let restored = SceneSnapshot::from_json(&json).unwrap();

        assert_eq!(restored.lights.len(), 1);
        assert_eq!(restored.walls.len(), 1);
        assert!(restored.walls.iter().all(|w| !w.is_boundary));

        let mut target = Scene::new(400.0, 300.0);
        restored.apply(&mut target);

        assert_eq!(target.lights.len(), 1);
        assert_eq!(target.user_walls().count(), 1);
        // The target's own boundary frame survives the restore.
        assert_eq!(target.walls.iter().filter(|w| w.is_boundary).count(), 4);
        assert!((target.walls[1].a.x - 400.0).abs() < 1e-6);
    }
}
