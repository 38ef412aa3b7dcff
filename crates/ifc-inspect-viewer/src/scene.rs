//! Scene setup - lights, ground grid and axis indicator

use crate::config::ViewerConfig;
use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

/// Ambient brightness for a relative intensity of 1
const AMBIENT_BRIGHTNESS: f32 = 160.0;
/// Directional illuminance (lux) for a relative intensity of 1
const DIRECTIONAL_ILLUMINANCE: f32 = 10_000.0;

/// Scene plugin
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<AxesGizmos>()
            .add_systems(Startup, (setup_lights, setup_grid, configure_gizmos))
            .add_systems(Update, (draw_grid, draw_axes));
    }
}

/// Gizmo group for the axis indicator, drawn over the grid
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct AxesGizmos;

/// One grid line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub start: Vec3,
    pub end: Vec3,
    /// Line through the origin
    pub center: bool,
}

/// Lines of a square grid on the XZ plane centred at the origin
///
/// `divisions + 1` lines run along each axis.
pub fn grid_lines(size: f32, divisions: u32) -> Vec<GridLine> {
    if divisions == 0 {
        return Vec::new();
    }

    let half = size / 2.0;
    let step = size / divisions as f32;
    let center = divisions / 2;
    let mut lines = Vec::with_capacity(2 * (divisions as usize + 1));

    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let is_center = divisions % 2 == 0 && i == center;
        lines.push(GridLine {
            start: Vec3::new(-half, 0.0, k),
            end: Vec3::new(half, 0.0, k),
            center: is_center,
        });
        lines.push(GridLine {
            start: Vec3::new(k, 0.0, -half),
            end: Vec3::new(k, 0.0, half),
            center: is_center,
        });
    }

    lines
}

/// Ground grid settings
#[derive(Resource, Clone, Debug)]
pub struct Grid {
    pub lines: Vec<GridLine>,
    pub color: Color,
    pub center_color: Color,
}

fn setup_lights(mut commands: Commands, config: Res<ViewerConfig>) {
    commands.spawn(AmbientLight {
        color: config.ambient_color,
        brightness: config.ambient_intensity * AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        DirectionalLight {
            color: config.directional_color,
            illuminance: config.directional_intensity * DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            affects_lightmapped_mesh_diffuse: true,
            ..default()
        },
        Transform::from_translation(config.directional_position)
            .looking_at(config.directional_target, Vec3::Y),
    ));
}

fn setup_grid(mut commands: Commands, config: Res<ViewerConfig>) {
    commands.insert_resource(Grid {
        lines: grid_lines(config.grid_size, config.grid_divisions),
        color: Color::srgb(0.533, 0.533, 0.533),
        center_color: Color::srgb(0.267, 0.267, 0.267),
    });
}

fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (axes, _) = config_store.config_mut::<AxesGizmos>();
    axes.depth_bias = -1.0;
}

fn draw_grid(grid: Option<Res<Grid>>, mut gizmos: Gizmos) {
    let Some(grid) = grid else { return };
    for line in &grid.lines {
        let color = if line.center {
            grid.center_color
        } else {
            grid.color
        };
        gizmos.line(line.start, line.end, color);
    }
}

fn draw_axes(config: Res<ViewerConfig>, mut gizmos: Gizmos<AxesGizmos>) {
    let length = config.axes_length;
    gizmos.line(Vec3::ZERO, Vec3::X * length, Color::srgb(1.0, 0.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Y * length, Color::srgb(0.0, 1.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Z * length, Color::srgb(0.0, 0.0, 1.0));
}
