use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub lights: LightsConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

#[derive(Debug, Deserialize)]
pub struct LightsConfig {
    #[serde(default = "default_light_range")]
    pub range: f32,
    #[serde(default = "default_light_rays")]
    pub rays: usize,
    #[serde(default = "default_light_radius")]
    pub radius: f32,
    #[serde(default = "default_seed_lights")]
    pub seed_lights: bool,
}

#[derive(Debug, Deserialize)]
pub struct InteractionConfig {
    #[serde(default = "default_wall_delete_threshold")]
    pub wall_delete_threshold: f32,
    #[serde(default = "default_double_click_secs")]
    pub double_click_secs: f64,
    #[serde(default = "default_double_click_radius")]
    pub double_click_radius: f32,
}

// Default values
fn default_window_title() -> String { "Lightcast - 2D Light Simulator".to_string() }
fn default_window_width() -> i32 { 1024 }
fn default_window_height() -> i32 { 768 }
fn default_bg_r() -> u8 { 20 }
fn default_bg_g() -> u8 { 20 }
fn default_bg_b() -> u8 { 24 }
fn default_light_range() -> f32 { 600.0 }
fn default_light_rays() -> usize { 1000 }
fn default_light_radius() -> f32 { 14.0 }
fn default_seed_lights() -> bool { true }
fn default_wall_delete_threshold() -> f32 { 15.0 }
fn default_double_click_secs() -> f64 { 0.3 }
fn default_double_click_radius() -> f32 { 8.0 }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            range: default_light_range(),
            rays: default_light_rays(),
            radius: default_light_radius(),
            seed_lights: default_seed_lights(),
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            wall_delete_threshold: default_wall_delete_threshold(),
            double_click_secs: default_double_click_secs(),
            double_click_radius: default_double_click_radius(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            lights: LightsConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}
