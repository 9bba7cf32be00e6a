//! WidgetCore - the single owner of all widget state
//!
//! Mode and size live here instead of ambient globals: the DOM layer holds a
//! handle to one `WidgetCore` and every event funnels through it.
//!
//! Orchestration only; the operations live in:
//! - commands/  - paint / reset / resize mutations
//! - validate/  - size-input validation and error kinds
//! - init/      - construction, settings, RNG

use crate::model::Grid;
use crate::paint::{CellPaint, ModeController, PaintMode};

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "init/settings.rs"]
mod settings;
#[path = "validate/validate.rs"]
mod validate;
mod facade;

pub use facade::SketchWidget;
pub use settings::WidgetSettings;
pub use validate::{validate_size, SizeError};

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    random::xorshift32(state)
}

/// The widget state: grid, active paint mode, settings, RNG.
pub struct WidgetCore {
    grid: Grid,
    modes: ModeController,
    settings: WidgetSettings,
    rng_state: u32,
}

impl WidgetCore {
    /// Create a widget at the settings' default size.
    pub fn new(settings: WidgetSettings) -> Self {
        init::create_widget_core(settings)
    }

    pub fn size(&self) -> u32 { self.grid.size() }

    pub fn cell_count(&self) -> usize { self.grid.cell_count() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn settings(&self) -> &WidgetSettings { &self.settings }

    /// Per-cell edge length: the fixed pixel budget split evenly per axis.
    /// Fractional pixels are allowed. The empty grid has no cells to size,
    /// so it reports 0.
    pub fn cell_edge(&self) -> f64 {
        if self.grid.size() == 0 {
            return 0.0;
        }
        self.settings.pixel_budget / f64::from(self.grid.size())
    }

    pub fn darkness(&self, row: u32, col: u32) -> f32 {
        self.grid.darkness(row, col)
    }

    /// Replace the settings from a JSON document and rebuild at the new
    /// default size.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        let settings = WidgetSettings::from_json(json)?;
        settings::apply_settings(self, settings);
        Ok(())
    }

    pub fn set_rng_seed(&mut self, seed: u32) {
        settings::set_rng_seed(self, seed);
    }

    /// Exclusive-select the active paint mode.
    pub fn set_mode(&mut self, mode: PaintMode) {
        self.modes.set_active(mode);
    }

    pub fn active_mode(&self) -> PaintMode {
        self.modes.active()
    }

    pub fn is_mode_active(&self, mode: PaintMode) -> bool {
        self.modes.is_active(mode)
    }

    /// Apply the active mode to one cell (one hover-enter).
    /// Returns the color the renderer should show, or `None` out of bounds.
    pub fn paint(&mut self, row: u32, col: u32) -> Option<CellPaint> {
        commands::paint_cell(self, row, col)
    }

    /// Zero every darkness and return all cells to the background color.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Validate raw size input and rebuild the grid at the new size.
    ///
    /// On error the grid is untouched; the caller surfaces the message and
    /// keeps the old cells mounted.
    pub fn resize(&mut self, raw_input: &str) -> Result<u32, SizeError> {
        commands::resize(self, raw_input)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
