//! IFC Inspect desktop viewer
//!
//! Usage: `ifc-inspect [FILE.ifc]`. Press `O` to open a file or drop one
//! onto the window.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let config = ifc_inspect_viewer::ViewerConfig {
        initial_file: std::env::args_os().nth(1).map(Into::into),
        ..ifc_inspect_viewer::ViewerConfig::from_env()
    };
    ifc_inspect_viewer::run_native(config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    ifc_inspect_viewer::wasm_start();
}
