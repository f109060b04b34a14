use crate::domain::Coord;

/// Pixel geometry of a canvas of square cells separated by outlines.
/// Used to turn clicks into cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLayout {
    pub cell_size: i32,
    pub outline_width: i32,
}

impl CellLayout {
    pub const fn new(cell_size: i32, outline_width: i32) -> Self {
        Self {
            cell_size,
            outline_width,
        }
    }

    const fn pitch(&self) -> i32 {
        self.cell_size + self.outline_width
    }

    /// Canvas size in pixels for a `width` x `height` grid, outer outline included.
    pub const fn canvas_size(&self, width: i32, height: i32) -> (i32, i32) {
        (
            self.pitch() * width + self.outline_width,
            self.pitch() * height + self.outline_width,
        )
    }

    /// Top-left pixel of cell (x, y)
    pub const fn cell_origin(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x * self.pitch() + self.outline_width,
            y * self.pitch() + self.outline_width,
        )
    }

    /// Cell under pixel (px, py), or `None` on an outline or off-canvas.
    /// The result is not checked against any world size.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<Coord> {
        Some((self.axis_cell(px)?, self.axis_cell(py)?))
    }

    fn axis_cell(&self, p: i32) -> Option<i32> {
        if p < 0 {
            return None;
        }
        (p % self.pitch() > self.outline_width).then(|| p / self.pitch())
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::new(15, 1)
    }
}
