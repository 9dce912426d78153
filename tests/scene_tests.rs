mod common;

use common::assert_close;
use lightcast::{Point, Scene, SceneObject, SceneSnapshot};

#[test]
fn scene_frames_viewport_with_four_boundary_walls() {
    let scene = Scene::new(800.0, 600.0);

    let boundary: Vec<_> = scene.walls.iter().filter(|w| w.is_boundary).collect();
    assert_eq!(boundary.len(), 4);

    // The frame is a closed rectangle: each edge ends where the next begins.
    for i in 0..4 {
        let next = (i + 1) % 4;
        assert_eq!(boundary[i].b, boundary[next].a);
    }

    for wall in &boundary {
        for p in [wall.a, wall.b] {
            assert!(p.x == 0.0 || p.x == 800.0 || p.y == 0.0 || p.y == 600.0);
        }
    }
}

#[test]
fn add_light_cycles_colors_and_rejects_duplicates() {
    let mut scene = Scene::new(800.0, 600.0);

    assert!(scene.add_light(Point::new(100.0, 100.0)));
    assert!(scene.add_light(Point::new(300.0, 100.0)));

    // Within the first light's 14 px hit disc: silent no-op.
    assert!(!scene.add_light(Point::new(108.0, 100.0)));
    assert_eq!(scene.lights.len(), 2);
    assert_ne!(scene.lights[0].color, scene.lights[1].color);
}

#[test]
fn move_light_is_unconditional() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.add_light(Point::new(100.0, 100.0));

    // Through a wall and outside the viewport, no checks apply.
    scene.add_wall(Point::new(200.0, 0.0), Point::new(200.0, 600.0));
    scene.move_light(0, Point::new(-50.0, 9000.0));

    assert_close(scene.lights[0].x, -50.0, 0.0, "light x");
    assert_close(scene.lights[0].y, 9000.0, 0.0, "light y");
}

#[test]
fn delete_at_wall_midpoint_removes_only_that_wall() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.add_wall(Point::new(100.0, 100.0), Point::new(300.0, 100.0));
    scene.add_wall(Point::new(100.0, 300.0), Point::new(300.0, 300.0));

    let deleted = scene.delete_at(Point::new(200.0, 100.0));
    assert!(matches!(deleted, Some(SceneObject::Wall(_))));

    let remaining: Vec<_> = scene.user_walls().collect();
    assert_eq!(remaining.len(), 1);
    assert_close(remaining[0].a.y, 300.0, 0.0, "surviving wall y");
}

#[test]
fn delete_prefers_light_over_underlying_wall() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.add_wall(Point::new(50.0, 100.0), Point::new(150.0, 100.0));
    scene.add_light(Point::new(100.0, 100.0));

    let deleted = scene.delete_at(Point::new(100.0, 100.0));
    assert_eq!(deleted, Some(SceneObject::Light(0)));
    assert_eq!(scene.lights.len(), 0);
    assert_eq!(scene.user_walls().count(), 1);
}

#[test]
fn delete_misses_outside_threshold_and_ignores_boundary() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.add_wall(Point::new(100.0, 100.0), Point::new(300.0, 100.0));

    // 20 px off the wall, beyond the 15 px threshold.
    assert_eq!(scene.delete_at(Point::new(200.0, 120.0)), None);

    // Dead on a boundary wall: never eligible.
    assert_eq!(scene.delete_at(Point::new(400.0, 0.0)), None);
    assert_eq!(scene.walls.len(), 5);
}

#[test]
fn resize_regenerates_boundary_and_preserves_everything_else() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.add_light(Point::new(900.0, 900.0));
    scene.add_wall(Point::new(100.0, 100.0), Point::new(500.0, 120.0));

    scene.resize(400.0, 300.0);

    let boundary: Vec<_> = scene.walls.iter().filter(|w| w.is_boundary).collect();
    assert_eq!(boundary.len(), 4);
    for wall in &boundary {
        for p in [wall.a, wall.b] {
            assert!(p.x <= 400.0 && p.y <= 300.0);
        }
    }

    // The light now sits outside the viewport but is untouched.
    assert_eq!(scene.lights.len(), 1);
    assert_close(scene.lights[0].x, 900.0, 0.0, "light x after resize");
    assert_close(scene.lights[0].y, 900.0, 0.0, "light y after resize");
    assert_eq!(scene.user_walls().count(), 1);
}

#[test]
fn snapshot_restores_lights_and_user_walls() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.add_light(Point::new(200.0, 150.0));
    scene.add_light(Point::new(600.0, 450.0));
    scene.add_wall(Point::new(100.0, 100.0), Point::new(500.0, 120.0));

    let json = SceneSnapshot::from_scene(&scene).to_json().unwrap();

    let mut restored = Scene::new(1024.0, 768.0);
    SceneSnapshot::from_json(&json).unwrap().apply(&mut restored);

    assert_eq!(restored.lights.len(), 2);
    assert_eq!(restored.user_walls().count(), 1);
    // The restored scene keeps its own boundary frame.
    assert_eq!(restored.walls.iter().filter(|w| w.is_boundary).count(), 4);
}
