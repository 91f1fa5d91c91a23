//! Ink grid: the per-call accumulator the rasterizer draws into

use super::ramp::{glyph, BLEED_INK, DISK_INK, MAX_INK, POINT_INK};
use super::shapes::Cell;

/// Fixed-size matrix of ink levels in `0..=MAX_INK`
///
/// Cells are addressed with signed coordinates so callers can hand in
/// anything a scaled primitive produces; out-of-bounds writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InkGrid {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Ink levels (row-major)
    cells: Vec<u8>,
}

impl InkGrid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        let col = usize::try_from(cell.col).ok()?;
        let row = usize::try_from(cell.row).ok()?;
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }

    /// Ink level at a cell, `None` when out of bounds
    #[inline]
    pub fn get(&self, col: i64, row: i64) -> Option<u8> {
        self.index(Cell { col, row }).map(|idx| self.cells[idx])
    }

    /// Add ink to a cell, saturating at `MAX_INK`
    #[inline]
    pub fn add_ink(&mut self, cell: Cell, amount: u8) {
        if let Some(idx) = self.index(cell) {
            self.cells[idx] = self.cells[idx].saturating_add(amount).min(MAX_INK);
        }
    }

    /// Splat a path point: full ink at the cell plus a plus-shaped bleed
    pub fn splat(&mut self, cell: Cell) {
        self.add_ink(cell, POINT_INK);
        for (dc, dr) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            self.add_ink(
                Cell {
                    col: cell.col.saturating_add(dc),
                    row: cell.row.saturating_add(dr),
                },
                BLEED_INK,
            );
        }
    }

    /// Fill a disk with a hard edge at `distance <= radius`
    pub fn fill_disk(&mut self, center: Cell, radius: i64) {
        if radius < 0 {
            return;
        }
        // Only walk the part of the bounding square that overlaps the grid
        let min_col = center.col.saturating_sub(radius).max(0);
        let max_col = center.col.saturating_add(radius).min(self.width as i64 - 1);
        let min_row = center.row.saturating_sub(radius).max(0);
        let max_row = center.row.saturating_add(radius).min(self.height as i64 - 1);
        let r = radius as f64;

        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let dx = (col - center.col) as f64;
                let dy = (row - center.row) as f64;
                if (dx * dx + dy * dy).sqrt() <= r {
                    self.add_ink(Cell { col, row }, DISK_INK);
                }
            }
        }
    }

    /// Iterate rows of ink levels
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Render through the ramp, one line per row joined by `\n`
    pub fn render(&self) -> String {
        if self.width == 0 {
            return vec![String::new(); self.height].join("\n");
        }
        self.rows()
            .map(|row| row.iter().map(|&level| glyph(level)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when no cell holds any ink
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&level| level == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = InkGrid::new(10, 5);
        assert_eq!(grid.cells.len(), 50);
        assert!(grid.is_blank());
    }

    #[test]
    fn test_add_ink_saturates() {
        let mut grid = InkGrid::new(3, 3);
        let cell = Cell { col: 1, row: 1 };
        grid.add_ink(cell, 3);
        grid.add_ink(cell, 3);
        assert_eq!(grid.get(1, 1), Some(MAX_INK));
        grid.add_ink(cell, u8::MAX);
        assert_eq!(grid.get(1, 1), Some(MAX_INK));
    }

    #[test]
    fn test_out_of_bounds_dropped() {
        let mut grid = InkGrid::new(3, 3);
        grid.add_ink(Cell { col: -1, row: 0 }, 2);
        grid.add_ink(Cell { col: 3, row: 0 }, 2);
        grid.add_ink(Cell { col: 0, row: i64::MAX }, 2);
        assert!(grid.is_blank());
        assert_eq!(grid.get(-1, 0), None);
    }

    #[test]
    fn test_splat_plus_shape() {
        let mut grid = InkGrid::new(3, 3);
        grid.splat(Cell { col: 1, row: 1 });
        assert_eq!(grid.render(), " ░ \n░▒░\n ░ ");
    }

    #[test]
    fn test_splat_outside_still_bleeds() {
        let mut grid = InkGrid::new(3, 3);
        grid.splat(Cell { col: -1, row: 1 });
        assert_eq!(grid.get(0, 1), Some(BLEED_INK));
        assert_eq!(grid.get(0, 0), Some(0));
    }

    #[test]
    fn test_fill_disk_radius_one() {
        let mut grid = InkGrid::new(3, 3);
        grid.fill_disk(Cell { col: 1, row: 1 }, 1);
        assert_eq!(grid.render(), " ▒ \n▒▒▒\n ▒ ");
    }

    #[test]
    fn test_fill_disk_zero_radius() {
        let mut grid = InkGrid::new(3, 3);
        grid.fill_disk(Cell { col: 2, row: 0 }, 0);
        assert_eq!(grid.get(2, 0), Some(DISK_INK));
        assert_eq!(grid.get(1, 0), Some(0));
    }

    #[test]
    fn test_fill_disk_far_away() {
        let mut grid = InkGrid::new(3, 3);
        grid.fill_disk(Cell { col: i64::MAX, row: i64::MIN }, i64::MAX);
        assert!(grid.is_blank());
    }

    #[test]
    fn test_render_zero_width() {
        let grid = InkGrid::new(0, 3);
        assert_eq!(grid.render(), "\n\n");
    }
}
