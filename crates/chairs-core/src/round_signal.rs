//! The music signal: a broadcast gate players block on each round.
//!
//! One instance lives for the whole game. The coordinator drives it
//! through one `Playing -> Stopped` transition per round:
//! - `reset()` at round start (before players can observe the round),
//! - `stop()` after the music delay, releasing **all** waiters at once.
//!
//! Built on a `tokio::sync::watch` channel, which gives exactly the
//! guarantees the gate needs: the state transition and the wake-all are
//! one atomic broadcast, a subscriber that arrives after the stop sees
//! the current value immediately, and `wait_for` re-checks its predicate
//! on every wake so spurious wakeups are filtered.

use tokio::sync::watch;

/// Whether the music is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    Playing,
    Stopped,
}

/// Broadcast gate for the "music stopped" transition.
#[derive(Debug)]
pub struct RoundSignal {
    tx: watch::Sender<MusicState>,
}

impl RoundSignal {
    /// Create the signal in the `Playing` state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(MusicState::Playing);
        RoundSignal { tx }
    }

    /// Transition to `Playing`.
    ///
    /// Called by the coordinator at round start, before any player can
    /// observe the round as started.
    pub fn reset(&self) {
        self.tx.send_replace(MusicState::Playing);
    }

    /// Transition to `Stopped`, releasing every current waiter in one
    /// broadcast (never a subset).
    pub fn stop(&self) {
        self.tx.send_replace(MusicState::Stopped);
    }

    /// Suspend until the music is stopped.
    ///
    /// Returns immediately if the signal is already `Stopped`, so a
    /// player arriving after the stop is not left behind.
    pub async fn wait_for_stop(&self) {
        let mut rx = self.tx.subscribe();

        // The sender lives in `self`, so the channel cannot close while
        // we are borrowing it; `wait_for` can only resolve with a value.
        let _ = rx.wait_for(|state| *state == MusicState::Stopped).await;
    }

    /// Current state of the gate.
    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow() == MusicState::Stopped
    }
}

impl Default for RoundSignal {
    fn default() -> Self {
        Self::new()
    }
}
