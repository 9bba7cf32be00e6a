//! Grid - row-major storage for the paintable cells
//!
//! The grid owns every Cell exclusively. Resize never mutates in place:
//! callers drop the old grid and build a fresh one, so stale darkness can
//! never leak across a size change.

use crate::model::cell::Cell;

mod indexing;

/// The full size×size collection of cells.
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a size×size grid of fresh cells, darkness 0.
    ///
    /// Size 0 is permitted and yields an empty grid. Range checking against
    /// user input happens in `widget::validate` before this is reached.
    pub fn new(size: u32) -> Self {
        let count = (size * size) as usize;
        let mut cells = Vec::with_capacity(count);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(row, col));
            }
        }
        Self { size, cells }
    }

    /// Zero every darkness without reallocating.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        if !self.in_bounds(row as i32, col as i32) {
            return None;
        }
        let idx = self.index(row, col);
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
        if !self.in_bounds(row as i32, col as i32) {
            return None;
        }
        let idx = self.index(row, col);
        self.cells.get_mut(idx)
    }

    pub fn darkness(&self, row: u32, col: u32) -> f32 {
        self.cell(row, col).map(|c| c.darkness).unwrap_or(0.0)
    }
}
