use serde::{Deserialize, Serialize};

/// How a head cell landing on the snake's own body is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionRule {
    /// Any overlap with a body cell (other than the head's own slot) is fatal
    Strict,
    /// Overlap is fatal only when the head cell appears twice among the
    /// trailing body cells. Kept for compatibility with an older build of
    /// the game that shipped this behavior.
    Lenient,
}

/// Configuration for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: u16,
    /// Ring slots the tail starts with (also the score offset)
    pub initial_tail_len: usize,
    /// Delay between game ticks
    pub tick_interval_ms: u64,
    /// Self-collision judgment
    pub collision_rule: CollisionRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_tail_len: 2,
            tick_interval_ms: 150,
            collision_rule: CollisionRule::Strict,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_size: u16) -> Self {
        Self {
            grid_size: grid_size.max(1),
            ..Default::default()
        }
    }

    /// Small grid, handy for tests
    pub fn small() -> Self {
        Self::new(10)
    }
}
