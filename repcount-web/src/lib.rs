//! Repcount Web - browser rep counter for gym exercises
//!
//! JS runs the camera and the pose model; this module turns each frame's
//! landmarks into phase, rep counts, posture feedback and draw commands.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod classifier;
pub mod config;
pub mod geometry;
pub mod overlay;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{configure_session, get_counts, get_profile, process_frame, reset_session};
pub use bridge::{BridgeError, Counts, FrameOutput};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// `level` is one of "trace", "debug", "info", "warn", "error"; anything
/// else falls back to "info".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "info" => log::Level::Info,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("✅ Repcount initialized with log level: {}", level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
