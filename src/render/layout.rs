//! Grid-to-canvas mapping and tail segmentation, the contract a drawing
//! surface consumes. Game logic never looks at this module.

use crate::game::Cell;

/// Maps grid indices onto a square drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    canvas_size: f64,
    blocks: u16,
}

impl GridLayout {
    pub fn new(canvas_size: f64, blocks: u16) -> Self {
        Self {
            canvas_size,
            blocks: blocks.max(1),
        }
    }

    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    /// Width of one grid cell on the canvas
    pub fn step(&self) -> f64 {
        self.canvas_size / f64::from(self.blocks)
    }

    /// Canvas position of a cell's center:
    /// `index * (canvas / blocks) + (canvas / blocks) / 2` on each axis
    pub fn cell_center(&self, cell: Cell) -> (f64, f64) {
        let step = self.step();
        (
            f64::from(cell.x) * step + step / 2.0,
            f64::from(cell.y) * step + step / 2.0,
        )
    }
}

/// Split an ordered tail into drawable runs of grid-adjacent cells.
///
/// A wrap across the grid edge leaves consecutive cells with Chebyshev
/// distance > 1; drawing one polyline through them would streak across the
/// whole board, so the tail breaks into a new fragment there.
pub fn tail_fragments(cells: &[Cell]) -> Vec<Vec<Cell>> {
    let mut fragments = Vec::new();
    let mut current: Vec<Cell> = Vec::new();

    for &cell in cells {
        if let Some(&last) = current.last() {
            if chebyshev(last, cell) > 1 {
                fragments.push(std::mem::take(&mut current));
            }
        }
        current.push(cell);
    }

    if !current.is_empty() {
        fragments.push(current);
    }
    fragments
}

fn chebyshev(a: Cell, b: Cell) -> u16 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    dx.max(dy)
}
