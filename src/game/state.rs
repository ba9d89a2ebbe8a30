use super::action::Direction;
use super::tail::TailRing;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// One step in a direction on a toroidal grid of side `grid_size`.
    /// Leaving the grid on one side reenters on the opposite side, so the
    /// result is always in bounds for any grid_size >= 1.
    pub fn stepped(self, direction: Direction, grid_size: u16) -> Self {
        let (dx, dy) = direction.delta();
        let n = i32::from(grid_size);
        Self {
            x: (i32::from(self.x) + dx).rem_euclid(n) as u16,
            y: (i32::from(self.y) + dy).rem_euclid(n) as u16,
        }
    }
}

/// The snake's head: where it is and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    pub cell: Cell,
    pub facing: Direction,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The head ran into the snake's own body
    GameOver,
    /// The tail fills the whole grid and no apple can be placed; a win
    BoardFull,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Running)
    }
}

/// Complete snapshot of one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub grid_size: u16,
    pub head: Head,
    pub tail: TailRing,
    pub apple: Cell,
    pub score: u32,
    pub steps: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(grid_size: u16, head: Head, tail: TailRing, apple: Cell) -> Self {
        Self {
            grid_size,
            head,
            tail,
            apple,
            score: 0,
            steps: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior() {
        let n = 20;
        let cell = Cell::new(5, 5);
        assert_eq!(cell.stepped(Direction::Up, n), Cell::new(5, 4));
        assert_eq!(cell.stepped(Direction::Down, n), Cell::new(5, 6));
        assert_eq!(cell.stepped(Direction::Left, n), Cell::new(4, 5));
        assert_eq!(cell.stepped(Direction::Right, n), Cell::new(6, 5));
    }

    #[test]
    fn test_step_wraps_both_edges() {
        let n = 20;
        assert_eq!(Cell::new(0, 0).stepped(Direction::Up, n), Cell::new(0, 19));
        assert_eq!(Cell::new(0, 0).stepped(Direction::Left, n), Cell::new(19, 0));
        assert_eq!(Cell::new(19, 19).stepped(Direction::Down, n), Cell::new(19, 0));
        assert_eq!(Cell::new(19, 19).stepped(Direction::Right, n), Cell::new(0, 19));
    }

    #[test]
    fn test_step_never_escapes_bounds() {
        let dirs = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for n in [1u16, 2, 3, 10, 50] {
            for x in 0..n {
                for y in 0..n {
                    for dir in dirs {
                        let next = Cell::new(x, y).stepped(dir, n);
                        assert!(next.x < n && next.y < n, "escaped on n={n} ({x},{y})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_step_on_unit_grid() {
        let cell = Cell::new(0, 0);
        assert_eq!(cell.stepped(Direction::Up, 1), cell);
        assert_eq!(cell.stepped(Direction::Right, 1), cell);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::Running.is_terminal());
        assert!(Phase::GameOver.is_terminal());
        assert!(Phase::BoardFull.is_terminal());
    }
}
