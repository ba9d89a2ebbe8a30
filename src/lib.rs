//! Snake on a toroidal grid.
//!
//! The board wraps on both axes, the tail is a ring buffer that only
//! reallocates on growth, and each game runs as a cancellable async tick
//! loop. The crate splits into:
//! - pure game rules (game module)
//! - the per-session tick loop (session module)
//! - terminal front-end (app, input, render modules)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
pub mod session;
