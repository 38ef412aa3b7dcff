//! Viewport sizing - aspect ratio and output surface dimensions

use crate::camera::MainCamera;
use crate::config::ViewerConfig;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Viewport plugin
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_viewport)
            .add_systems(Update, handle_window_resize);
    }
}

/// Current viewport dimensions
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical width
    pub width: f32,
    /// Logical height
    pub height: f32,
    /// Width over height
    pub aspect: f32,
    /// Device pixels per logical pixel, capped
    pub pixel_ratio: f32,
    /// Cap applied to the device scale factor
    pub max_pixel_ratio: f32,
}

impl Viewport {
    /// Create a viewport of the given logical size
    pub fn new(width: f32, height: f32, scale_factor: f32, max_pixel_ratio: f32) -> Self {
        let mut viewport = Self {
            width: 0.0,
            height: 0.0,
            aspect: 1.0,
            pixel_ratio: 1.0,
            max_pixel_ratio,
        };
        viewport.resize(width, height, scale_factor);
        viewport
    }

    /// Recompute aspect and pixel ratio for a new window size
    ///
    /// A zero height keeps the previous aspect.
    pub fn resize(&mut self, width: f32, height: f32, scale_factor: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        if self.height > 0.0 {
            self.aspect = self.width / self.height;
        }
        self.pixel_ratio = scale_factor.min(self.max_pixel_ratio);
    }

    /// Output surface size in device pixels
    pub fn surface_size(&self) -> UVec2 {
        UVec2::new(
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

fn init_viewport(
    mut commands: Commands,
    config: Res<ViewerConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let viewport = match windows.single() {
        Ok(window) => Viewport::new(
            window.width(),
            window.height(),
            window.scale_factor(),
            config.max_pixel_ratio,
        ),
        Err(_) => Viewport::new(
            config.window_size.0 as f32,
            config.window_size.1 as f32,
            1.0,
            config.max_pixel_ratio,
        ),
    };
    commands.insert_resource(viewport);
}

/// Track window resizes and keep the camera projection in step
fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window>,
    viewport: Option<ResMut<Viewport>>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(mut viewport) = viewport else {
        return;
    };

    for event in resized.read() {
        let scale_factor = windows
            .get(event.window)
            .map(|window| window.scale_factor())
            .unwrap_or(1.0);
        viewport.resize(event.width, event.height, scale_factor);

        let surface = viewport.surface_size();
        log::debug!(
            "Viewport {}x{} (aspect {:.3}), surface {}x{}",
            viewport.width,
            viewport.height,
            viewport.aspect,
            surface.x,
            surface.y
        );

        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = viewport.aspect;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resize_updates_aspect_and_surface() {
        let mut viewport = Viewport::new(800.0, 600.0, 1.0, 2.0);
        assert_relative_eq!(viewport.aspect, 800.0 / 600.0);

        viewport.resize(1024.0, 768.0, 1.0);
        assert_relative_eq!(viewport.aspect, 1024.0 / 768.0);
        assert_relative_eq!(viewport.pixel_ratio, 1.0);
        assert_eq!(viewport.surface_size(), UVec2::new(1024, 768));
    }

    #[test]
    fn test_pixel_ratio_is_capped() {
        let viewport = Viewport::new(400.0, 300.0, 3.0, 2.0);
        assert_relative_eq!(viewport.pixel_ratio, 2.0);
        assert_eq!(viewport.surface_size(), UVec2::new(800, 600));

        let retina = Viewport::new(400.0, 300.0, 1.5, 2.0);
        assert_eq!(retina.surface_size(), UVec2::new(600, 450));
    }

    #[test]
    fn test_zero_height_keeps_aspect() {
        let mut viewport = Viewport::new(1600.0, 900.0, 1.0, 2.0);
        viewport.resize(1600.0, 0.0, 1.0);
        assert_relative_eq!(viewport.aspect, 1600.0 / 900.0);
        assert_eq!(viewport.surface_size(), UVec2::new(1600, 0));
    }
}
