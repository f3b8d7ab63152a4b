//! Fixed 3x3 board geometry on the 800x600 surface.
//!
//! Cells are indexed 0..8 in row-major order. Everything here is a pure
//! function of the constants below.

pub const SURFACE_WIDTH: u32 = 800;
pub const SURFACE_HEIGHT: u32 = 600;

pub const CELL_COUNT: usize = 9;
pub const CELL_DIAMETER: f64 = 130.0;
pub const CELL_MARGIN: f64 = 20.0;

const FIRST_COL_X: f64 = 80.0;
const FIRST_ROW_Y: f64 = 85.0;
const STRIDE: f64 = CELL_DIAMETER + CELL_MARGIN;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Screen rectangle of cell `index`. Panics if `index >= 9`.
pub fn cell_rect(index: usize) -> CellRect {
    assert!(index < CELL_COUNT, "cell index {index} out of range");
    let col = (index % 3) as f64;
    let row = (index / 3) as f64;
    CellRect {
        x: FIRST_COL_X + col * STRIDE,
        y: FIRST_ROW_Y + row * STRIDE,
        width: CELL_DIAMETER,
        height: CELL_DIAMETER,
    }
}

/// First cell (in index order) containing the surface point, if any.
pub fn cell_at(x: f64, y: f64) -> Option<usize> {
    (0..CELL_COUNT).find(|&i| cell_rect(i).contains(x, y))
}
