use rand::Rng;

use super::state::Cell;
use super::tail::TailRing;

/// Pick a new apple cell uniformly at random among grid cells not occupied
/// by the tail.
///
/// Builds an occupancy mask over all cells, draws a uniform index into the
/// free ones, and scans row-major to the drawn cell. O(grid_size^2), but it
/// only runs on growth events. Returns `None` when the tail covers the whole
/// grid; callers treat that as a board-full win.
pub fn place(rng: &mut impl Rng, grid_size: u16, tail: &TailRing) -> Option<Cell> {
    let n = usize::from(grid_size);
    let mut occupied = vec![false; n * n];

    for cell in tail.iter() {
        occupied[usize::from(cell.y) * n + usize::from(cell.x)] = true;
    }

    // A degenerate ring can hold the same cell in several slots, so count
    // free cells from the mask rather than subtracting the tail length.
    let free = occupied.iter().filter(|taken| !**taken).count();
    if free == 0 {
        return None;
    }

    let pick = rng.gen_range(0..free);
    let mut seen = 0;
    for (index, taken) in occupied.iter().enumerate() {
        if *taken {
            continue;
        }
        if seen == pick {
            return Some(Cell::new((index % n) as u16, (index / n) as u16));
        }
        seen += 1;
    }

    unreachable!("pick is always below the free-cell count")
}
