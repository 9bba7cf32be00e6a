use wasm_bindgen::prelude::*;

use crate::paint::PaintMode;

use super::{WidgetCore, WidgetSettings};

/// JS-facing wrapper around `WidgetCore`.
///
/// Headless by design: the DOM layer (`dom::mount`) owns its own core. This
/// handle exists so an embedding page or test harness can drive the same
/// state machine without a document.
#[wasm_bindgen]
pub struct SketchWidget {
    core: WidgetCore,
}

#[wasm_bindgen]
impl SketchWidget {
    /// Create a widget with compiled-in default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WidgetCore::new(WidgetSettings::default()),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> usize { self.core.cell_count() }

    /// Per-cell edge length in pixels (fractional allowed).
    #[wasm_bindgen(getter)]
    pub fn cell_edge(&self) -> f64 { self.core.cell_edge() }

    #[wasm_bindgen(getter)]
    pub fn active_mode(&self) -> String {
        self.core.active_mode().name().to_string()
    }

    pub fn darkness(&self, row: u32, col: u32) -> f32 {
        self.core.darkness(row, col)
    }

    /// Exclusive-select a paint mode by name ("default" | "darken" | "rgb").
    pub fn set_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode = PaintMode::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown paint mode: {}", name)))?;
        self.core.set_mode(mode);
        Ok(())
    }

    /// Paint one cell under the active mode; returns the CSS color to apply,
    /// or `None` when the position is out of bounds.
    pub fn paint(&mut self, row: u32, col: u32) -> Option<String> {
        self.core.paint(row, col).map(|p| p.to_css())
    }

    /// Reset all cells to darkness 0 / background color.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Validate and apply a new grid size. The error is the user-facing
    /// message; on error the grid is unchanged.
    pub fn resize(&mut self, raw_input: &str) -> Result<u32, JsValue> {
        self.core
            .resize(raw_input)
            .map_err(|e| JsValue::from_str(e.message()))
    }

    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn set_rng_seed(&mut self, seed: u32) {
        self.core.set_rng_seed(seed);
    }

    pub fn get_settings_json(&self) -> String {
        self.core.settings().to_json()
    }
}

impl Default for SketchWidget {
    fn default() -> Self {
        Self::new()
    }
}
