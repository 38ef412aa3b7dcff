//! Damped orbit camera
//!
//! Left drag rotates around the target, right drag pans, the wheel dollies.
//! Input accumulates into pending deltas; every frame a fixed fraction of
//! them is applied and the rest carries over, which gives the camera its
//! glide after the pointer stops.

use crate::config::ViewerConfig;
use crate::viewport::Viewport;
use bevy::ecs::message::MessageReader;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

/// Keeps the polar angle off the poles
const POLAR_EPSILON: f32 = 1e-6;

/// Camera plugin
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_input_system, camera_update_system).chain());
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Orbit state around a target point, in spherical coordinates (Y up)
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitController {
    /// Point to orbit around
    pub target: Vec3,
    /// Distance from target
    pub radius: f32,
    /// Azimuth around Y, measured from +Z towards +X
    pub theta: f32,
    /// Polar angle from +Y
    pub phi: f32,
    /// Fraction of pending motion applied per update
    pub damping_factor: f32,
    /// Rotation speed multiplier
    pub rotate_speed: f32,
    /// Dolly speed multiplier
    pub zoom_speed: f32,
    /// Closest allowed distance
    pub min_distance: f32,
    /// Farthest allowed distance
    pub max_distance: f32,
    /// Vertical field of view in radians, for pan scaling
    pub fov: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_pan: Vec3,
    pending_scale: f32,
}

impl OrbitController {
    /// Create a controller looking from `position` at `target`
    pub fn new(position: Vec3, target: Vec3, damping_factor: f32, fov: f32) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        Self {
            target,
            radius,
            theta,
            phi,
            damping_factor: damping_factor.clamp(0.0, 1.0),
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            fov,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_pan: Vec3::ZERO,
            pending_scale: 1.0,
        }
    }

    /// Create a controller from the viewer configuration
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            config.camera_position,
            config.camera_target,
            config.damping_factor,
            config.fov_degrees.to_radians(),
        )
    }

    /// Camera position for the current state
    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    /// Queue a rotation for a pointer drag of `delta` pixels
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.pending_theta -= TAU * delta.x / viewport_height * self.rotate_speed;
        self.pending_phi -= TAU * delta.y / viewport_height * self.rotate_speed;
    }

    /// Queue a screen-space pan for a pointer drag of `delta` pixels
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let target_distance = self.radius * (self.fov / 2.0).tan();
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        self.pending_pan += right * (-2.0 * delta.x * target_distance / viewport_height);
        self.pending_pan += up * (2.0 * delta.y * target_distance / viewport_height);
    }

    /// Queue a dolly step; positive `wheel` moves towards the target
    pub fn dolly(&mut self, wheel: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        if wheel > 0.0 {
            self.pending_scale *= step;
        } else if wheel < 0.0 {
            self.pending_scale /= step;
        }
    }

    /// Advance one frame and return the new camera position
    pub fn update(&mut self) -> Vec3 {
        let factor = self.damping_factor;

        self.theta += self.pending_theta * factor;
        self.phi += self.pending_phi * factor;
        self.phi = self.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pending_pan * factor;

        self.pending_theta *= 1.0 - factor;
        self.pending_phi *= 1.0 - factor;
        self.pending_pan *= 1.0 - factor;
        self.pending_scale = 1.0;

        self.position()
    }

    /// Whether any motion is still pending
    pub fn is_moving(&self) -> bool {
        self.pending_theta.abs() > 1e-6
            || self.pending_phi.abs() > 1e-6
            || self.pending_pan.length_squared() > 1e-12
    }
}

/// Spawn the camera and insert its controller
fn setup_camera(mut commands: Commands, config: Res<ViewerConfig>) {
    use bevy::render::view::Msaa;

    let controller = OrbitController::from_config(&config);
    let position = controller.position();

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(position).looking_at(controller.target, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: controller.fov,
            near: config.near,
            far: config.far,
            ..default()
        }),
        MainCamera,
        Msaa::Sample4,
    ));
    commands.insert_resource(controller);
}

/// Feed pointer input into the controller
fn camera_input_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    viewport: Option<Res<Viewport>>,
    controller: Option<ResMut<OrbitController>>,
) {
    let Some(mut controller) = controller else {
        return;
    };
    let height = viewport.map(|v| v.height).unwrap_or(0.0);

    let rotating = mouse_button.pressed(MouseButton::Left);
    let panning = mouse_button.pressed(MouseButton::Right);
    for ev in mouse_motion.read() {
        if rotating {
            controller.rotate(ev.delta, height);
        } else if panning {
            controller.pan(ev.delta, height);
        }
    }

    for ev in mouse_wheel.read() {
        controller.dolly(ev.y);
    }
}

/// Apply damping and move the camera
fn camera_update_system(
    controller: Option<ResMut<OrbitController>>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(mut controller) = controller else {
        return;
    };
    let position = controller.update();

    if let Ok(mut transform) = camera.single_mut() {
        *transform = Transform::from_translation(position).looking_at(controller.target, Vec3::Y);
    }
}
