use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    #[inline]
    pub fn cell_count(&self) -> usize { self.cells.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.size + col) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        if self.size == 0 {
            return (0, 0);
        }
        let row = (idx as u32) / self.size;
        let col = (idx as u32) % self.size;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }
}
