//! Core game logic for Snake on a toroidal grid.
//!
//! Everything in here is free of I/O, timers, and rendering: the engine maps
//! one state snapshot plus one queued action to the next snapshot, so the
//! whole ruleset can be driven from tests or from the async session loop.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod state;
pub mod tail;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{CollisionRule, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use state::{Cell, GameState, Head, Phase};
pub use tail::TailRing;
