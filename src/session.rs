//! The per-session tick loop: one cooperative task that advances the game at
//! a fixed cadence, reads the queued direction once per tick, publishes state
//! snapshots, and stops on cancellation or a terminal phase.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};

const SLOT_EMPTY: u8 = 0;

/// Single-slot mailbox for the pending direction.
///
/// The input handler writes, the tick loop reads; last write wins and a read
/// clears the slot, so each key press steers at most one tick. A slightly
/// stale read is acceptable, which is why a single atomic is enough.
#[derive(Debug, Default)]
pub struct DirectionSlot(AtomicU8);

impl DirectionSlot {
    pub fn new() -> Self {
        Self(AtomicU8::new(SLOT_EMPTY))
    }

    /// Queue a direction, replacing whatever was queued before
    pub fn offer(&self, direction: Direction) {
        self.0.store(encode(direction), Ordering::Release);
    }

    /// Take the queued direction, leaving the slot empty
    pub fn take(&self) -> Option<Direction> {
        decode(self.0.swap(SLOT_EMPTY, Ordering::AcqRel))
    }
}

fn encode(direction: Direction) -> u8 {
    match direction {
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 3,
        Direction::Right => 4,
    }
}

fn decode(raw: u8) -> Option<Direction> {
    match raw {
        1 => Some(Direction::Up),
        2 => Some(Direction::Down),
        3 => Some(Direction::Left),
        4 => Some(Direction::Right),
        _ => None,
    }
}

/// Handle to a running session task.
///
/// Dropping the handle also stops the loop, since the shutdown sender goes
/// away with it.
pub struct SessionHandle {
    slot: Arc<DirectionSlot>,
    shutdown: watch::Sender<bool>,
    snapshots: watch::Receiver<GameState>,
    task: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Queue a direction change for the next tick
    pub fn steer(&self, direction: Direction) {
        self.slot.offer(direction);
    }

    /// Latest published game state
    pub fn snapshot(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Signal the loop to stop. Interrupts an in-flight tick delay; no
    /// further ticks fire afterward.
    pub fn cancel(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Wait for the loop task to finish. Harmless to call again once the
    /// task is gone; a finished handle must not be polled twice.
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

/// Start a fresh session on its own task
pub fn spawn(config: GameConfig) -> SessionHandle {
    let tick = Duration::from_millis(config.tick_interval_ms);
    let mut engine = GameEngine::new(config);
    let state = engine.reset();

    let slot = Arc::new(DirectionSlot::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());

    let task = tokio::spawn(run(
        engine,
        state,
        Arc::clone(&slot),
        snapshot_tx,
        shutdown_rx,
        tick,
    ));

    SessionHandle {
        slot,
        shutdown: shutdown_tx,
        snapshots: snapshot_rx,
        task: Some(task),
    }
}

async fn run(
    mut engine: GameEngine,
    mut state: GameState,
    slot: Arc<DirectionSlot>,
    snapshots: watch::Sender<GameState>,
    mut shutdown: watch::Receiver<bool>,
    tick: Duration,
) {
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            // fires on cancel and when the handle is dropped
            _ = shutdown.changed() => break,

            _ = ticker.tick() => {
                let action = slot.take().map(Action::Steer).unwrap_or(Action::Continue);
                let (next, _outcome) = engine.tick(&state, action);
                state = next;
                let _ = snapshots.send(state.clone());

                // terminal phase: stop scheduling ticks, await restart
                if !state.is_running() {
                    break;
                }
            }
        }
    }
}
