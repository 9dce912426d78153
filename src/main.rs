use arboard::Clipboard;
use macroquad::prelude::*;

use lightcast::config::Config;
use lightcast::geometry::{Point, Wall};
use lightcast::light::{Light, LightColor};
use lightcast::scene::{LightDefaults, Scene, SceneObject};
use lightcast::snapshot::SceneSnapshot;
use lightcast::visibility::visibility_polygon;

/// Radial falloff of the light fill, sampled at the fractional distance
/// `s` from the light (0 at the light, 1 at full range).
fn falloff_alpha(s: f32) -> f32 {
    const STOPS: [(f32, f32); 6] = [
        (0.0, 1.0),
        (0.1, 0.8),
        (0.3, 0.5),
        (0.6, 0.2),
        (0.9, 0.05),
        (1.0, 0.0),
    ];

    let s = s.clamp(0.0, 1.0);
    for pair in STOPS.windows(2) {
        let (s0, a0) = pair[0];
        let (s1, a1) = pair[1];
        if s <= s1 {
            return a0 + (a1 - a0) * ((s - s0) / (s1 - s0));
        }
    }
    0.0
}

/// Triangle-fan indices for `rim` polygon vertices around a center vertex
/// at index 0. Returns None when the polygon is empty or the highest vertex
/// index would not fit the mesh's u16 index space.
fn fan_indices(rim: usize) -> Option<Vec<u16>> {
    if rim == 0 || rim > u16::MAX as usize {
        return None;
    }

    let rim = rim as u16;
    let mut indices = Vec::with_capacity(rim as usize * 3);
    for i in 0..rim {
        indices.push(0);
        indices.push(1 + i);
        indices.push(1 + (i + 1) % rim);
    }
    Some(indices)
}

/// Draw one light's visibility polygon as a triangle fan with per-vertex
/// alpha following the falloff stops. Empty polygons draw nothing, as do
/// ray counts too large to index.
fn draw_light_area(light: &Light, walls: &[Wall]) {
    let polygon = visibility_polygon(light, walls);
    let indices = match fan_indices(polygon.len()) {
        Some(indices) => indices,
        None => return,
    };

    let (r, g, b) = light.color.rgb();
    let tint = |alpha: f32| Color::from_rgba(r, g, b, (alpha * 255.0) as u8);

    let mut vertices = Vec::with_capacity(polygon.len() + 1);
    vertices.push(Vertex::new(light.x, light.y, 0.0, 0.0, 0.0, tint(1.0)));
    for vp in &polygon {
        let s = light.position().distance(vp.point) / light.range;
        vertices.push(Vertex::new(
            vp.point.x,
            vp.point.y,
            0.0,
            0.0,
            0.0,
            tint(falloff_alpha(s)),
        ));
    }

    draw_mesh(&Mesh {
        vertices,
        indices,
        texture: None,
    });
}

fn draw_dashed_line(a: Point, b: Point, thickness: f32, color: Color) {
    const DASH: f32 = 10.0;
    const GAP: f32 = 8.0;

    let len = a.distance(b);
    if len <= f32::EPSILON {
        return;
    }
    let ux = (b.x - a.x) / len;
    let uy = (b.y - a.y) / len;

    let mut d = 0.0;
    while d < len {
        let end = (d + DASH).min(len);
        draw_line(
            a.x + ux * d,
            a.y + uy * d,
            a.x + ux * end,
            a.y + uy * end,
            thickness,
            color,
        );
        d += DASH + GAP;
    }
}

/// Interactive state driving the scene.
struct App {
    scene: Scene,
    dragged_light: Option<usize>,
    drawing_wall: Option<Point>,
    last_mouse: Point,
    last_click: Option<(f64, Point)>,
    double_click_secs: f64,
    double_click_radius: f32,
    background: Color,
}

impl App {
    fn new(config: &Config) -> Self {
        let defaults = LightDefaults {
            range: config.lights.range,
            ray_count: config.lights.rays,
            radius: config.lights.radius,
        };

        let width = config.window.width as f32;
        let height = config.window.height as f32;
        let mut scene = Scene::with_defaults(
            width,
            height,
            defaults,
            config.interaction.wall_delete_threshold,
        );

        // Starting layout: a couple of walls to cast shadows against, and
        // two warm lights when seeding is enabled.
        scene.add_wall(Point::new(100.0, 100.0), Point::new(500.0, 120.0));
        scene.add_wall(Point::new(600.0, 200.0), Point::new(650.0, 300.0));

        if config.lights.seed_lights {
            for x in [width / 4.0, width * 3.0 / 4.0] {
                scene.lights.push(Light::new(
                    x,
                    height / 2.0,
                    LightColor::WarmWhite,
                    defaults.range,
                    defaults.ray_count,
                    defaults.radius,
                ));
            }
        }

        App {
            scene,
            dragged_light: None,
            drawing_wall: None,
            last_mouse: Point::new(0.0, 0.0),
            last_click: None,
            double_click_secs: config.interaction.double_click_secs,
            double_click_radius: config.interaction.double_click_radius,
            background: Color::from_rgba(
                config.window.background_r,
                config.window.background_g,
                config.window.background_b,
                255,
            ),
        }
    }

    fn handle_left_press(&mut self, pos: Point) {
        // A pending wall draw is completed by the next left click.
        if let Some(start) = self.drawing_wall.take() {
            self.scene.add_wall(start, pos);
            return;
        }

        let now = get_time();
        let is_double = self.last_click.map_or(false, |(t, p)| {
            now - t <= self.double_click_secs && p.distance(pos) <= self.double_click_radius
        });

        if is_double {
            // Rejected silently when over an existing light.
            self.scene.add_light(pos);
            self.last_click = None;
            return;
        }
        self.last_click = Some((now, pos));

        if let Some(SceneObject::Light(i)) = self.scene.hovered_object(pos) {
            self.dragged_light = Some(i);
        }
    }

    fn handle_delete(&mut self, pos: Point) {
        // Delete cancels an in-progress wall draw first.
        if self.drawing_wall.take().is_some() {
            return;
        }
        self.scene.delete_at(pos);
    }

    fn copy_to_clipboard(&self) {
        let snapshot = SceneSnapshot::from_scene(&self.scene);
        let json = match snapshot.to_json() {
            Ok(json) => json,
            Err(e) => {
                println!("Failed to encode scene snapshot: {}", e);
                return;
            }
        };

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&json) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Scene snapshot copied to clipboard!");
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn paste_from_clipboard(&mut self) {
        let text = match Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => text,
            Err(e) => {
                println!("Failed to read clipboard: {}", e);
                return;
            }
        };

        match SceneSnapshot::from_json(&text) {
            Ok(snapshot) => {
                snapshot.apply(&mut self.scene);
                self.dragged_light = None;
                println!("Scene restored from clipboard snapshot");
            }
            Err(e) => {
                println!("Clipboard does not hold a scene snapshot: {}", e);
            }
        }
    }

    fn draw(&self) {
        clear_background(self.background);

        for light in &self.scene.lights {
            draw_light_area(light, &self.scene.walls);
        }

        for wall in self.scene.user_walls() {
            draw_line(wall.a.x, wall.a.y, wall.b.x, wall.b.y, 2.0, BLACK);
        }

        for light in &self.scene.lights {
            draw_circle(light.x, light.y, light.radius, WHITE);
            draw_circle_lines(light.x, light.y, light.radius, 1.0, BLACK);
        }

        if let Some(start) = self.drawing_wall {
            draw_dashed_line(start, self.last_mouse, 3.0, GRAY);
        }

        let info = format!(
            "Lights: {}  Walls: {}\nDouble click: add light\nLeft drag: move light\nRight click + left click: draw wall\nDel: delete hovered / cancel wall\nC: copy scene, V: paste scene\nEsc: quit",
            self.scene.lights.len(),
            self.scene.user_walls().count()
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);
    }
}

fn window_conf() -> Conf {
    let config = Config::load();
    Conf {
        window_title: config.window.title,
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    let mut app = App::new(&config);

    loop {
        let (mx, my) = mouse_position();
        let pos = Point::new(mx, my);
        app.last_mouse = pos;

        // Window resize regenerates only the boundary frame.
        if screen_width() != app.scene.width || screen_height() != app.scene.height {
            app.scene.resize(screen_width(), screen_height());
        }

        if is_mouse_button_pressed(MouseButton::Right) {
            app.drawing_wall = Some(pos);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            app.handle_left_press(pos);
        }

        if is_mouse_button_released(MouseButton::Left) {
            app.dragged_light = None;
        }

        if let Some(i) = app.dragged_light {
            app.scene.move_light(i, pos);
        }

        if is_key_pressed(KeyCode::Delete) || is_key_pressed(KeyCode::Backspace) {
            app.handle_delete(pos);
        }

        if is_key_pressed(KeyCode::C) {
            app.copy_to_clipboard();
        }

        if is_key_pressed(KeyCode::V) {
            app.paste_from_clipboard();
        }

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.draw();

        next_frame().await
    }
}
