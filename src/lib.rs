//! Sketchgrid Engine - hover-to-paint grid widget in WASM
//!
//! Architecture:
//! - model/   - Cell and Grid data records
//! - paint/   - paint modes and the colors they produce
//! - widget/  - WidgetCore orchestration + JS facade
//! - dom/     - renderer and event bindings (web-sys)

pub mod model;
pub mod paint;
pub mod widget;
pub mod dom;

pub use model::{Cell, Grid};
pub use paint::{CellPaint, ModeController, PaintMode};
pub use widget::{SizeError, SketchWidget, WidgetCore, WidgetSettings};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Sketchgrid WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
