//! Drawing primitives recognized in icon markup

/// 2D point in icon space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cell coordinate on the ink grid. May lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

/// Per-axis scale from icon space to grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Map an icon-space point to the cell it falls in.
    ///
    /// `f64 as i64` saturates, so huge or non-finite coordinates end up
    /// far out of bounds instead of wrapping.
    #[inline]
    pub fn to_cell(&self, p: Point) -> Cell {
        Cell {
            col: (p.x * self.x).floor() as i64,
            row: (p.y * self.y).floor() as i64,
        }
    }

    /// Scale a radius by the smaller axis factor, rounding up
    #[inline]
    pub fn radius(&self, r: f64) -> i64 {
        (r * self.x.min(self.y)).ceil() as i64
    }
}

/// A primitive extracted from icon markup
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Coordinate pairs from a path's `d` attribute, in token order
    Path(Vec<Point>),
    /// Circle from `cx`, `cy`, `r`
    Circle { center: Point, radius: f64 },
}
