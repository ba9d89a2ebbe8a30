use super::state::Cell;

/// The snake's body as a ring buffer.
///
/// Slots are stored in a fixed-capacity buffer; `start` marks the oldest
/// occupied slot and logical order runs `(start + i) % capacity` from oldest
/// to newest. Steady-state movement overwrites the oldest slot in place;
/// only growth reallocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailRing {
    cells: Vec<Cell>,
    start: usize,
}

impl TailRing {
    /// Ring of `len` slots, all holding `cell`. A fresh snake starts as this
    /// degenerate ring collapsed onto the head cell.
    pub fn filled(len: usize, cell: Cell) -> Self {
        assert!(len >= 1, "tail ring needs at least one slot");
        Self {
            cells: vec![cell; len],
            start: 0,
        }
    }

    /// Ring over `cells` taken as logical (oldest to newest) order
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "tail ring needs at least one slot");
        Self { cells, start: 0 }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at logical index `i`, 0 being the oldest
    pub fn get(&self, i: usize) -> Cell {
        self.cells[(self.start + i) % self.cells.len()]
    }

    /// Cells in logical order, oldest first, newest (the head's slot) last
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cells.len()).map(move |i| self.get(i))
    }

    /// The most recently written slot, i.e. the head's current cell
    pub fn newest(&self) -> Cell {
        self.get(self.cells.len() - 1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Drop-oldest, append-newest without reallocation: the oldest slot is
    /// overwritten with `cell` and the start index advances by one.
    pub fn rotate_in(&mut self, cell: Cell) {
        let slot = self.start;
        self.cells[slot] = cell;
        self.start = (slot + 1) % self.cells.len();
    }

    /// Growth: reallocate to capacity + 1, copying slots in logical order,
    /// append `cell`, and reset the start index to 0.
    pub fn grow(&mut self, cell: Cell) {
        let mut unwound: Vec<Cell> = self.iter().collect();
        unwound.push(cell);
        self.cells = unwound;
        self.start = 0;
    }
}
