//! Paint modes and the mode controller.
//!
//! The controller holds exactly one active mode. Exclusivity is structural:
//! there is no per-mode boolean to get out of sync, so two modes can never
//! read as active at once.

mod color;

pub use color::CellPaint;

use crate::model::Cell;

/// How much one Darken hover adds, before saturation at 1.0.
pub const DARKEN_STEP: f32 = 0.1;

/// The exclusive set of paint behaviors.
///
/// "Nothing selected yet" is `Default`: a fresh widget paints opaque black,
/// same as an explicit Default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Default,
    Darken,
    Rgb,
}

impl PaintMode {
    /// Mode name as the DOM control layer spells it.
    pub fn name(&self) -> &'static str {
        match self {
            PaintMode::Default => "default",
            PaintMode::Darken => "darken",
            PaintMode::Rgb => "rgb",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(PaintMode::Default),
            "darken" => Some(PaintMode::Darken),
            "rgb" => Some(PaintMode::Rgb),
            _ => None,
        }
    }
}

pub struct ModeController {
    active: PaintMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            active: PaintMode::Default,
        }
    }

    /// Exclusive select: `mode` on, everything else off, regardless of
    /// previous state.
    pub fn set_active(&mut self, mode: PaintMode) {
        self.active = mode;
    }

    #[inline]
    pub fn active(&self) -> PaintMode {
        self.active
    }

    pub fn is_active(&self, mode: PaintMode) -> bool {
        self.active == mode
    }

    /// Apply the active mode to one cell for a single hover-enter.
    ///
    /// `rng_state` feeds Rgb mode; the other modes leave it untouched.
    pub fn paint(&self, cell: &mut Cell, rng_state: &mut u32) -> CellPaint {
        match self.active {
            PaintMode::Default => CellPaint::Black,
            PaintMode::Darken => CellPaint::BlackAlpha(cell.darken(DARKEN_STEP)),
            PaintMode::Rgb => {
                let r = random_channel(rng_state);
                let g = random_channel(rng_state);
                let b = random_channel(rng_state);
                CellPaint::Rgb(r, g, b)
            }
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform channel in [0, 255), matching the source widget's `random(0, 255)`.
fn random_channel(state: &mut u32) -> u8 {
    (crate::widget::xorshift32(state) % 255) as u8
}
