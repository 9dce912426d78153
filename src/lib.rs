pub mod config;
pub mod geometry;
pub mod light;
pub mod scene;
pub mod snapshot;
pub mod visibility;

pub use geometry::{distance_to_segment, ray_segment_intersection, Direction, Hit, Point, Wall};
pub use light::{Light, LightColor};
pub use scene::{LightDefaults, Scene, SceneObject};
pub use snapshot::SceneSnapshot;
pub use visibility::{visibility_polygon, VisibilityPoint};
