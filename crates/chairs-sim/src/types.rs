//! Shared types for the simulation wiring.
//!
//! This module defines:
//! - `GameHandles`: the bundle of shared objects injected into every actor
//! - channel aliases for the observable event stream

use std::sync::Arc;

use chairs_core::{GameEvent, GameState, PlayerId, RoundSignal, SeatPool, ShutdownFlag};
use tokio::sync::mpsc;

/// Every shared object one game needs, bundled for injection.
///
/// There are no globals: each actor receives a clone of this at spawn.
/// Cloning is cheap (a handful of `Arc`s) and every clone refers to the
/// same single game.
#[derive(Debug, Clone)]
pub struct GameHandles {
    pub state: Arc<GameState>,
    pub seats: Arc<SeatPool>,
    pub signal: Arc<RoundSignal>,
    pub shutdown: Arc<ShutdownFlag>,
}

impl GameHandles {
    /// Create fresh shared state for one game with players `1..=players`.
    pub fn new(players: usize) -> Self {
        let ids = (1..=players as u32).map(PlayerId);
        GameHandles {
            state: Arc::new(GameState::new(ids)),
            seats: Arc::new(SeatPool::new()),
            signal: Arc::new(RoundSignal::new()),
            shutdown: Arc::new(ShutdownFlag::new()),
        }
    }
}

/// Observable events from all actors to whoever is watching the game.
pub type EventTx = mpsc::UnboundedSender<GameEvent>;
pub type EventRx = mpsc::UnboundedReceiver<GameEvent>;
