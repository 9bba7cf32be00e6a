use crate::model::Grid;
use crate::paint::CellPaint;

use super::validate;
use super::{SizeError, WidgetCore};

pub(super) fn paint_cell(core: &mut WidgetCore, row: u32, col: u32) -> Option<CellPaint> {
    if !core.grid.in_bounds(row as i32, col as i32) {
        return None;
    }

    let cell = core.grid.cell_mut(row, col)?;
    Some(core.modes.paint(cell, &mut core.rng_state))
}

pub(super) fn reset(core: &mut WidgetCore) {
    core.grid.reset();
}

pub(super) fn resize(core: &mut WidgetCore, raw_input: &str) -> Result<u32, SizeError> {
    let size = validate::validate_size(raw_input)?;

    // Old grid is discarded wholesale, never mutated in place.
    core.grid = Grid::new(size);
    Ok(size)
}
