//! Coordinator actor.
//!
//! The single orchestrating task. Per round:
//! 1. `ArmingRound`: compute and arm the seat count, reset the signal.
//! 2. `MusicPlaying`: sleep for the clock's next duration.
//! 3. `Stopping`: stop the signal, releasing every waiting player.
//! 4. `Settling`: sleep a fixed grace period so every racer resolves
//!    its take and reports back before the player count is re-checked.
//!
//! Once one player remains it raises shutdown, releases the signal a
//! final time (so no player is left blocked forever), and declares the
//! winner.

use std::time::Duration;

use chairs_core::GameEvent;
use tracing::debug;

use crate::music::MusicClock;
use crate::types::{EventTx, GameHandles};

/// Drive rounds until a sole survivor remains, then declare it.
pub async fn run_coordinator<M>(
    handles: GameHandles,
    events: EventTx,
    mut music: M,
    settle: Duration,
) where
    M: MusicClock,
{
    while handles.state.remaining_count() > 1 {
        // ArmingRound: seats before the gate, so a released racer can
        // never observe an unarmed pool.
        let seats = handles.state.start_round();
        handles.seats.arm(seats);
        handles.signal.reset();

        let round = handles.state.round();
        let players = handles.state.remaining_count();
        let _ = events.send(GameEvent::round_started(round, players, seats));

        // MusicPlaying.
        let play = music.next_play_duration();
        debug!(round, play_ms = play.as_millis() as u64, "music playing");
        tokio::time::sleep(play).await;

        // Stopping.
        handles.signal.stop();
        let _ = events.send(GameEvent::music_stopped(round));

        // Settling.
        tokio::time::sleep(settle).await;
    }

    // Declaring: shutdown first, then one more release so a player
    // still waiting wakes up and observes it.
    handles.shutdown.trigger();
    handles.signal.stop();

    let winner = handles
        .state
        .sole_survivor_id()
        .expect("game ended without a sole survivor");
    let _ = events.send(GameEvent::winner_declared(winner, handles.state.round()));
}
