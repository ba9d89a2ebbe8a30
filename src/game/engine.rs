use rand::rngs::StdRng;
use rand::SeedableRng;

use super::action::{Action, Direction};
use super::apple;
use super::config::{CollisionRule, GameConfig};
use super::state::{Cell, GameState, Head, Phase};
use super::tail::TailRing;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the head landed on the apple this tick
    pub ate_apple: bool,
    /// Phase after the tick
    pub phase: Phase,
}

/// Advances a game session by one tick at a time.
///
/// The engine holds the configuration and the RNG; all game state lives in
/// [`GameState`] snapshots. `tick` never mutates its input, it returns the
/// next snapshot, so the transition is unit-testable without a running loop.
///
/// The RNG is an owned `StdRng` rather than a thread-local handle: the
/// engine moves onto the session task, so it has to be `Send`.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh session: head at the fixed start pose, tail collapsed
    /// onto the head cell, apple freshly placed.
    pub fn reset(&mut self) -> GameState {
        let n = self.config.grid_size;
        let head = Head {
            cell: Cell::new(1 % n, n - 1),
            facing: Direction::Up,
        };
        let tail = TailRing::filled(self.config.initial_tail_len.max(1), head.cell);

        let mut state = GameState::new(n, head, tail, head.cell);
        match apple::place(&mut self.rng, n, &state.tail) {
            Some(cell) => state.apple = cell,
            // the tail already covers the grid; nothing left to play
            None => state.phase = Phase::BoardFull,
        }
        state
    }

    /// Advance the game by exactly one tick.
    ///
    /// The queued direction is applied unless it would reverse the current
    /// facing; the guard runs here, every tick, because input can race the
    /// most recently accepted turn. The head then steps with wrap-around,
    /// the tail ring is updated (in place, or grown on an apple), and
    /// self-collision is judged on the result.
    pub fn tick(&mut self, state: &GameState, action: Action) -> (GameState, TickOutcome) {
        if !state.is_running() {
            return (
                state.clone(),
                TickOutcome {
                    ate_apple: false,
                    phase: state.phase,
                },
            );
        }

        let mut next = state.clone();

        let facing = match action {
            Action::Steer(requested) if !state.head.facing.is_opposite(requested) => requested,
            _ => state.head.facing,
        };
        let head_cell = state.head.cell.stepped(facing, state.grid_size);
        next.head = Head {
            cell: head_cell,
            facing,
        };

        let ate_apple = head_cell == state.apple;
        if ate_apple {
            next.tail.grow(head_cell);
            next.score += 1;
            match apple::place(&mut self.rng, next.grid_size, &next.tail) {
                Some(cell) => next.apple = cell,
                None => next.phase = Phase::BoardFull,
            }
        } else {
            next.tail.rotate_in(head_cell);
        }

        if next.is_running() && self.collides(&next.tail, head_cell) {
            next.phase = Phase::GameOver;
        }

        next.steps += 1;
        let outcome = TickOutcome {
            ate_apple,
            phase: next.phase,
        };
        (next, outcome)
    }

    /// Count tail slots holding the head cell, excluding the head's own
    /// just-written slot (the newest one) once.
    fn collides(&self, tail: &TailRing, head_cell: Cell) -> bool {
        let matches = tail
            .iter()
            .take(tail.len() - 1)
            .filter(|cell| *cell == head_cell)
            .count();

        match self.config.collision_rule {
            CollisionRule::Strict => matches >= 1,
            CollisionRule::Lenient => matches >= 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_apple() -> Cell {
        Cell::new(15, 15)
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.head.cell, Cell::new(1, 19));
        assert_eq!(state.head.facing, Direction::Up);
        assert_eq!(state.tail.len(), 2);
        assert_eq!(state.tail.get(0), state.head.cell);
        assert_eq!(state.tail.get(1), state.head.cell);
        assert!(!state.tail.contains(state.apple));
    }

    #[test]
    fn test_first_tick_from_fresh_session() {
        // head (1,19) facing Up over a degenerate ring; one tick with no
        // input moves to (1,18) and advances the ring start
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.apple = far_apple();

        let (next, outcome) = engine.tick(&state, Action::Continue);

        assert_eq!(next.head.cell, Cell::new(1, 18));
        assert_eq!(next.head.facing, Direction::Up);
        assert!(!outcome.ate_apple);
        assert_eq!(next.tail.len(), 2);
        assert_eq!(
            next.tail.iter().collect::<Vec<_>>(),
            vec![Cell::new(1, 19), Cell::new(1, 18)]
        );
        assert_eq!(next.steps, 1);
        assert!(next.is_running());
        // the input snapshot is untouched
        assert_eq!(state.head.cell, Cell::new(1, 19));
        assert_eq!(state.steps, 0);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.apple = far_apple();

        let (next, _) = engine.tick(&state, Action::Steer(Direction::Down));

        assert_eq!(next.head.facing, Direction::Up);
        assert_eq!(next.head.cell, Cell::new(1, 18));
    }

    #[test]
    fn test_turn_is_accepted() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.apple = far_apple();

        let (next, _) = engine.tick(&state, Action::Steer(Direction::Right));

        assert_eq!(next.head.facing, Direction::Right);
        assert_eq!(next.head.cell, Cell::new(2, 19));
    }

    #[test]
    fn test_wrap_around_tick() {
        let mut engine = GameEngine::new(GameConfig::default());
        let head = Head {
            cell: Cell::new(0, 3),
            facing: Direction::Left,
        };
        let tail = TailRing::from_cells(vec![Cell::new(1, 3), Cell::new(0, 3)]);
        let state = GameState::new(20, head, tail, far_apple());

        let (next, _) = engine.tick(&state, Action::Continue);

        assert_eq!(next.head.cell, Cell::new(19, 3));
        assert!(next.is_running());
    }

    #[test]
    fn test_apple_tick_grows_and_scores() {
        let mut engine = GameEngine::new(GameConfig::default());
        let head = Head {
            cell: Cell::new(4, 5),
            facing: Direction::Right,
        };
        let tail = TailRing::from_cells(vec![Cell::new(3, 5), Cell::new(4, 5)]);
        let state = GameState::new(20, head, tail, Cell::new(5, 5));

        let (next, outcome) = engine.tick(&state, Action::Continue);

        assert!(outcome.ate_apple);
        assert_eq!(next.head.cell, Cell::new(5, 5));
        assert_eq!(next.tail.len(), 3);
        assert_eq!(next.tail.newest(), Cell::new(5, 5));
        assert_eq!(next.score, 1);
        assert!(!next.tail.contains(next.apple));
        assert!(next.is_running());
    }

    #[test]
    fn test_non_apple_tick_keeps_length() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.apple = Cell::new(5, 5);

        let (next, _) = engine.tick(&state, Action::Continue);
        assert_eq!(next.tail.len(), state.tail.len());
    }

    #[test]
    fn test_score_counts_apples_eaten() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        for expected in 1..=3 {
            // drop the apple directly in the head's path
            state.apple = state.head.cell.stepped(state.head.facing, state.grid_size);
            let (next, outcome) = engine.tick(&state, Action::Continue);
            assert!(outcome.ate_apple);
            assert_eq!(next.score, expected);
            assert_eq!(next.tail.len() as u32 - 2, expected);
            state = next;
        }
    }

    #[test]
    fn test_self_collision_strict() {
        let mut engine = GameEngine::new(GameConfig::default());
        // projected head cell (5,5) is an existing non-adjacent tail cell
        let head = Head {
            cell: Cell::new(5, 6),
            facing: Direction::Up,
        };
        let tail = TailRing::from_cells(vec![
            Cell::new(9, 9),
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
        ]);
        let state = GameState::new(20, head, tail, far_apple());

        let (next, outcome) = engine.tick(&state, Action::Continue);

        assert_eq!(next.phase, Phase::GameOver);
        assert_eq!(outcome.phase, Phase::GameOver);
        assert!(!next.is_running());
    }

    #[test]
    fn test_self_collision_lenient_needs_two_matches() {
        let config = GameConfig {
            collision_rule: CollisionRule::Lenient,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(config);
        let head = Head {
            cell: Cell::new(5, 6),
            facing: Direction::Up,
        };
        let tail = TailRing::from_cells(vec![
            Cell::new(9, 9),
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
        ]);
        let state = GameState::new(20, head, tail, far_apple());

        // one overlap: the lenient rule lets it slide
        let (next, _) = engine.tick(&state, Action::Continue);
        assert!(next.is_running());

        // two overlaps are fatal even under the lenient rule
        let head = Head {
            cell: Cell::new(5, 6),
            facing: Direction::Up,
        };
        let tail = TailRing::from_cells(vec![
            Cell::new(9, 9),
            Cell::new(5, 5),
            Cell::new(5, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
        ]);
        let state = GameState::new(20, head, tail, far_apple());
        let (next, _) = engine.tick(&state, Action::Continue);
        assert_eq!(next.phase, Phase::GameOver);
    }

    #[test]
    fn test_board_full_is_a_win() {
        let mut engine = GameEngine::new(GameConfig::new(2));
        let head = Head {
            cell: Cell::new(0, 1),
            facing: Direction::Right,
        };
        let tail = TailRing::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)]);
        let state = GameState::new(2, head, tail, Cell::new(1, 1));

        let (next, outcome) = engine.tick(&state, Action::Continue);

        assert!(outcome.ate_apple);
        assert_eq!(next.phase, Phase::BoardFull);
        assert_eq!(next.tail.len(), 4);
        assert_eq!(next.score, 1);
    }

    #[test]
    fn test_engine_moves_across_threads() {
        // the session loop runs on a spawned task, so the engine (and the
        // RNG inside it) must be Send
        fn assert_send<T: Send>(_: &T) {}
        let engine = GameEngine::new(GameConfig::default());
        assert_send(&engine);
    }

    #[test]
    fn test_terminal_state_is_inert() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.phase = Phase::GameOver;
        state.apple = far_apple();

        let (next, outcome) = engine.tick(&state, Action::Continue);

        assert_eq!(next, state);
        assert_eq!(outcome.phase, Phase::GameOver);
        assert!(!outcome.ate_apple);
    }
}
