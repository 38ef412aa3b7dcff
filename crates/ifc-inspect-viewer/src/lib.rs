//! IFC Inspect viewer
//!
//! Bevy-based 3D scene (grid, axes, lights, damped orbit camera) that prints
//! the item mapping of every IFC file it is given to the console.
//!
//! Runs natively in a window (file dialog on `O`, drag-and-drop) or on a
//! canvas in WASM, where the page hands file text to [`IfcInspector`].

pub mod camera;
pub mod config;
pub mod loader;
pub mod scene;
pub mod viewport;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Re-exports
pub use camera::{CameraPlugin, MainCamera, OrbitController};
pub use config::ViewerConfig;
pub use loader::{
    IfcFileLoadedEvent, IngestionContext, LoadIfcFileEvent, LoaderPlugin, OpenFileDialogRequest,
};
pub use scene::{grid_lines, AxesGizmos, ScenePlugin};
pub use viewport::{Viewport, ViewportPlugin};

/// Global debug mode flag (set from `DEBUG` or the `?debug=1` URL parameter)
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Check if debug mode is enabled
pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Enable or disable debug mode
pub fn set_debug(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// Initialize debug mode from URL parameters
#[cfg(target_arch = "wasm32")]
fn init_debug_from_url() {
    if let Some(window) = web_sys::window() {
        if let Ok(search) = window.location().search() {
            if search.contains("debug=1") || search.contains("debug=true") {
                set_debug(true);
            }
        }
    }
}

/// Main viewer plugin - combines all subsystems
pub struct IfcInspectPlugin {
    pub config: ViewerConfig,
}

impl Plugin for IfcInspectPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone()).add_plugins((
            ViewportPlugin,
            ScenePlugin,
            CameraPlugin,
            LoaderPlugin,
        ));
    }
}

/// Write extraction output to the console (stdout natively)
#[cfg(not(target_arch = "wasm32"))]
pub fn console_output(text: &str) {
    println!("{}", text);
}

/// Write extraction output to the browser console
#[cfg(target_arch = "wasm32")]
pub fn console_output(text: &str) {
    web_sys::console::log_1(&text.into());
}

fn log_plugin(config: &ViewerConfig) -> LogPlugin {
    LogPlugin {
        filter: config.log_filter(),
        level: if config.debug {
            bevy::log::Level::DEBUG
        } else {
            bevy::log::Level::INFO
        },
        ..default()
    }
}

/// Run native desktop viewer
#[cfg(not(target_arch = "wasm32"))]
pub fn run_native(config: ViewerConfig) {
    set_debug(config.debug);
    let (width, height) = config.window_size;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        resolution: (width, height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(log_plugin(&config)),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(IfcInspectPlugin { config })
        .run();
}

/// Run the viewer on a canvas element (WASM)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn run_on_canvas(canvas_selector: &str) {
    console_error_panic_hook::set_once();
    init_debug_from_url();

    let config = ViewerConfig {
        debug: is_debug(),
        ..ViewerConfig::default()
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        canvas: Some(canvas_selector.to_string()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(log_plugin(&config)),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(IfcInspectPlugin { config })
        .run();
}

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn wasm_start() {
    run_on_canvas("#bevy-canvas");
}

/// File-input entry point for the page (WASM)
///
/// The page's `file-input` change handler reads the selected file as text
/// and passes it to [`IfcInspector::load_file`].
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct IfcInspector {
    ingestion: ifc_inspect_extract::Ingestion,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl IfcInspector {
    #[wasm_bindgen(constructor)]
    pub fn new(exclude_geometry: Option<bool>) -> IfcInspector {
        let config = ifc_inspect_extract::IngestConfig {
            exclude_geometry: exclude_geometry.unwrap_or(true),
        };
        IfcInspector {
            ingestion: ifc_inspect_extract::Ingestion::new(config),
        }
    }

    /// Ingest file text, log the item mapping and return it as JSON
    #[wasm_bindgen(js_name = loadFile)]
    pub fn load_file(&mut self, text: &str) -> Result<String, JsValue> {
        match self.ingestion.load_file(text) {
            Ok(report) => {
                loader::print_report(&report);
                Ok(report.json)
            }
            Err(e) => {
                log::error!("Failed to load IFC file: {e}");
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }
}
