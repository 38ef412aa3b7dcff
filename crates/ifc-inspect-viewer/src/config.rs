//! Viewer configuration
//!
//! Defaults describe the initial scene; a few values can be overridden from
//! environment variables.

use bevy::prelude::*;
use std::path::PathBuf;

/// Viewer configuration resource
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Window title
    pub title: String,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Initial camera position
    pub camera_position: Vec3,
    /// Point the camera orbits around
    pub camera_target: Vec3,
    /// Fraction of pending camera motion applied per frame
    pub damping_factor: f32,
    /// Ambient light colour
    pub ambient_color: Color,
    /// Ambient light intensity, relative
    pub ambient_intensity: f32,
    /// Directional light colour
    pub directional_color: Color,
    /// Directional light intensity, relative
    pub directional_intensity: f32,
    /// Directional light position
    pub directional_position: Vec3,
    /// Point the directional light shines at
    pub directional_target: Vec3,
    /// Grid edge length
    pub grid_size: f32,
    /// Grid cells per edge
    pub grid_divisions: u32,
    /// Axis indicator length
    pub axes_length: f32,
    /// Upper bound on the device pixel ratio
    pub max_pixel_ratio: f32,
    /// Leave geometry entities out of the printed mapping
    pub exclude_geometry: bool,
    /// Verbose logging
    pub debug: bool,
    /// File to load on startup
    pub initial_file: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "IFC Inspect".to_string(),
            window_size: (1280, 720),
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            camera_position: Vec3::new(8.0, 13.0, 15.0),
            camera_target: Vec3::new(-2.0, 0.0, 0.0),
            damping_factor: 0.05,
            ambient_color: Color::WHITE,
            ambient_intensity: 0.5,
            directional_color: Color::WHITE,
            directional_intensity: 1.0,
            directional_position: Vec3::new(0.0, 10.0, 0.0),
            directional_target: Vec3::new(-5.0, 0.0, 0.0),
            grid_size: 50.0,
            grid_divisions: 30,
            axes_length: 1.0,
            max_pixel_ratio: 2.0,
            exclude_geometry: true,
            debug: false,
            initial_file: None,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            exclude_geometry: var("IFC_INSPECT_EXCLUDE_GEOMETRY")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.exclude_geometry),
            max_pixel_ratio: var("IFC_INSPECT_MAX_PIXEL_RATIO")
                .and_then(|v| v.trim().parse::<f32>().ok())
                .filter(|ratio| *ratio >= 1.0)
                .unwrap_or(defaults.max_pixel_ratio),
            debug: var("DEBUG")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.debug),
            ..defaults
        }
    }

    /// Log filter handed to Bevy's `LogPlugin`
    pub fn log_filter(&self) -> String {
        let level = if self.debug { "debug" } else { "info" };
        format!("{level},wgpu=error,naga=warn")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
