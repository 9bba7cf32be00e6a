use serde::{Deserialize, Serialize};

use crate::model::Grid;

use super::WidgetCore;

fn default_pixel_budget() -> f64 { 800.0 }
fn default_size() -> u32 { 4 }
fn default_error_display_ms() -> u32 { 3000 }

/// Startup configuration. Compiled-in defaults; an embedding page can replace
/// them with a JSON document through the facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Total rendered edge length of the grid, split evenly per axis.
    #[serde(default = "default_pixel_budget")]
    pub pixel_budget: f64,
    /// Grid size at startup and after a settings reload.
    #[serde(default = "default_size")]
    pub default_size: u32,
    /// How long a validation message stays in the status area.
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u32,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            pixel_budget: default_pixel_budget(),
            default_size: default_size(),
            error_display_ms: default_error_display_ms(),
        }
    }
}

impl WidgetSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(super) fn apply_settings(core: &mut WidgetCore, settings: WidgetSettings) {
    core.grid = Grid::new(settings.default_size);
    core.settings = settings;
}

pub(super) fn set_rng_seed(core: &mut WidgetCore, seed: u32) {
    // xorshift32 is stuck at zero; nudge to the smallest nonzero state.
    core.rng_state = seed.max(1);
}
