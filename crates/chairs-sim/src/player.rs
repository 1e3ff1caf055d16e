//! Player actor.
//!
//! One task per player, running a small state machine:
//! `Waiting -> Racing -> {Seated, Eliminated}`, where `Seated` loops
//! back to `Waiting` for the next round and `Eliminated` is terminal.
//!
//! A player suspends only inside `wait_for_stop` and the pacing sleep.
//! Elimination is self-reported: the player that fails to take a seat
//! is the one that removes itself from the game state.

use std::time::Duration;

use chairs_core::{GameEvent, PlayerId};
use tracing::debug;

use crate::types::{EventTx, GameHandles};

/// Run one player's loop until it is eliminated, the game is decided,
/// or shutdown is raised.
pub async fn run_player(id: PlayerId, handles: GameHandles, events: EventTx, pace: Duration) {
    loop {
        // Game already decided or shutting down: nothing left to race for.
        if handles.state.remaining_count() <= 1 || handles.shutdown.is_triggered() {
            debug!(player = %id, "player leaving: game over");
            break;
        }

        // Waiting.
        handles.signal.wait_for_stop().await;

        // The final release exists precisely so we can observe this.
        if handles.shutdown.is_triggered() {
            debug!(player = %id, "player leaving: shutdown");
            break;
        }

        // Racing.
        let round = handles.state.round();
        if handles.seats.try_take() {
            handles.state.register_seated(id);
            let _ = events.send(GameEvent::player_seated(round, id));
        } else {
            handles.state.eliminate(id);
            let _ = events.send(GameEvent::player_eliminated(round, id));
            debug!(player = %id, round, "player eliminated");
            break;
        }

        // Pacing: stay out of the wait until the coordinator has moved
        // past this round, so the stop we just consumed cannot release
        // us a second time. Config guarantees pace >= settle.
        tokio::time::sleep(pace).await;
    }
}
