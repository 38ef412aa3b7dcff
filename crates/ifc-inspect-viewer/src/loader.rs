//! IFC file loading - handles file dialog and drag-and-drop
//!
//! Every selected file goes through [`Ingestion`]; the resulting item
//! mapping is printed to the console.

use crate::config::ViewerConfig;
use anyhow::Context;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use bevy::tasks::IoTaskPool;
use bevy::tasks::Task;
use ifc_inspect_extract::{IngestConfig, IngestReport, Ingestion};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Plugin for file loading functionality
pub struct LoaderPlugin;

impl Plugin for LoaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LoadIfcFileEvent>()
            .add_message::<IfcFileLoadedEvent>()
            .add_message::<OpenFileDialogRequest>()
            .init_resource::<FileDialogState>()
            .add_systems(Startup, (setup_ingestion, queue_initial_file))
            .add_systems(
                Update,
                (
                    open_dialog_shortcut,
                    handle_open_dialog_request,
                    poll_file_dialog,
                    handle_file_drop,
                    handle_load_file_event,
                    update_window_title,
                )
                    .chain(),
            );
    }
}

/// Message to request opening a file dialog
#[derive(Message)]
pub struct OpenFileDialogRequest;

/// State for tracking async file dialog
#[derive(Resource, Default)]
pub struct FileDialogState {
    task: Option<Task<Option<PathBuf>>>,
}

/// Message to trigger file loading (from dialog, drop or other sources)
#[derive(Message)]
pub struct LoadIfcFileEvent {
    pub path: PathBuf,
}

/// Message emitted when file loading completes
#[derive(Message)]
pub struct IfcFileLoadedEvent {
    pub path: PathBuf,
    pub item_count: usize,
    pub error_count: usize,
}

/// Ingestion context owned by the app
#[derive(Resource)]
pub struct IngestionContext(pub Ingestion);

fn setup_ingestion(mut commands: Commands, config: Res<ViewerConfig>) {
    commands.insert_resource(IngestionContext(Ingestion::new(IngestConfig {
        exclude_geometry: config.exclude_geometry,
    })));
}

/// Load the file named on the command line
fn queue_initial_file(
    config: Res<ViewerConfig>,
    mut load_events: MessageWriter<LoadIfcFileEvent>,
) {
    if let Some(path) = &config.initial_file {
        load_events.write(LoadIfcFileEvent { path: path.clone() });
    }
}

/// Key `O` opens the file dialog
fn open_dialog_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<OpenFileDialogRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyO) {
        requests.write(OpenFileDialogRequest);
    }
}

/// System to handle request to open file dialog (spawns async task)
#[cfg(not(target_arch = "wasm32"))]
fn handle_open_dialog_request(
    mut requests: MessageReader<OpenFileDialogRequest>,
    mut state: ResMut<FileDialogState>,
) {
    for _ in requests.read() {
        // Don't spawn another dialog if one is already pending
        if state.task.is_some() {
            log::debug!("File dialog already open");
            continue;
        }

        log::info!("Opening file dialog...");

        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async {
            use rfd::AsyncFileDialog;

            let file = AsyncFileDialog::new()
                .add_filter("IFC Files", &["ifc", "IFC"])
                .set_title("Open IFC File")
                .pick_file()
                .await;

            file.map(|f| f.path().to_path_buf())
        });

        state.task = Some(task);
    }
}

/// On WASM the page's file input calls `IfcInspector::load_file` instead
#[cfg(target_arch = "wasm32")]
fn handle_open_dialog_request(
    mut requests: MessageReader<OpenFileDialogRequest>,
    mut _state: ResMut<FileDialogState>,
) {
    for _ in requests.read() {
        log::debug!("File dialog is provided by the page");
    }
}

/// System to poll async file dialog result
fn poll_file_dialog(
    mut state: ResMut<FileDialogState>,
    mut load_events: MessageWriter<LoadIfcFileEvent>,
) {
    if let Some(ref mut task) = state.task {
        if let Some(result) = bevy::tasks::block_on(bevy::tasks::poll_once(task)) {
            if let Some(path) = result {
                log::info!("File selected: {}", path.display());
                load_events.write(LoadIfcFileEvent { path });
            } else {
                log::debug!("File dialog cancelled");
            }
            state.task = None;
        }
    }
}

/// System to handle drag-and-drop files
fn handle_file_drop(
    mut file_drag_drop_events: MessageReader<bevy::window::FileDragAndDrop>,
    mut load_events: MessageWriter<LoadIfcFileEvent>,
) {
    for event in file_drag_drop_events.read() {
        if let bevy::window::FileDragAndDrop::DroppedFile { path_buf, .. } = event {
            if is_ifc_path(path_buf) {
                log::info!("File dropped: {}", path_buf.display());
                load_events.write(LoadIfcFileEvent {
                    path: path_buf.clone(),
                });
            } else {
                log::warn!("Ignoring dropped file {}", path_buf.display());
            }
        }
    }
}

/// System to handle file load events
fn handle_load_file_event(
    mut events: MessageReader<LoadIfcFileEvent>,
    ingestion: Option<ResMut<IngestionContext>>,
    mut loaded_events: MessageWriter<IfcFileLoadedEvent>,
) {
    let Some(mut ingestion) = ingestion else {
        return;
    };

    for event in events.read() {
        match load_ifc_file(&mut ingestion.0, &event.path) {
            Ok(report) => {
                print_report(&report);
                loaded_events.write(IfcFileLoadedEvent {
                    path: event.path.clone(),
                    item_count: report.items.len(),
                    error_count: report.errors.len(),
                });
            }
            Err(e) => {
                log::error!("{e:#}");
            }
        }
    }
}

/// Show the loaded file's name in the window title
fn update_window_title(
    mut loaded: MessageReader<IfcFileLoadedEvent>,
    config: Res<ViewerConfig>,
    mut windows: Query<&mut Window>,
) {
    for event in loaded.read() {
        let name = event
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        for mut window in &mut windows {
            window.title = format!("{} - {} ({} items)", config.title, name, event.item_count);
        }
    }
}

/// Read a file from disk and ingest it
///
/// Bytes that are not valid UTF-8 (Latin-1 exports) are replaced with
/// U+FFFD rather than rejecting the file.
fn load_ifc_file(ingestion: &mut Ingestion, path: &Path) -> anyhow::Result<IngestReport> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        log::warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
    }
    ingestion
        .load_file(&content)
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Whether a path has an `.ifc` extension
pub fn is_ifc_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ifc"))
}

/// Print the item mapping to the console
pub fn print_report(report: &IngestReport) {
    crate::console_output(&report.json);
    if !report.errors.is_empty() {
        log::warn!("{} items could not be read", report.errors.len());
    }
    if crate::is_debug() {
        for failure in &report.errors {
            log::debug!("  line {} ({}): {}", failure.index, failure.id, failure.error);
        }
    }
}
