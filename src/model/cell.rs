/// One paintable grid position with its darkness accumulator.
///
/// Darkness lives here, not on the DOM node: the renderer derives appearance
/// from the record, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub darkness: f32,
}

impl Cell {
    pub fn new(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            darkness: 0.0,
        }
    }

    /// Accumulate one Darken step, saturating at full opacity.
    pub fn darken(&mut self, step: f32) -> f32 {
        self.darkness = (self.darkness + step).min(1.0);
        self.darkness
    }

    pub fn clear(&mut self) {
        self.darkness = 0.0;
    }
}
