//! Observable game events.
//!
//! These are **transport-agnostic** logical events: every lifecycle
//! transition the game makes is announced as one [`GameEvent`].
//!
//! All events are **round-stamped** so a consumer can group or assert
//! on them without extra context. Rendering (log lines, a future UI)
//! lives with whoever consumes the stream; this module is purely
//! logical.

use crate::player_id::PlayerId;

/// A lifecycle event emitted by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A round opened: seats are armed and the music is playing.
    RoundStarted(RoundStarted),

    /// The music stopped; players are racing for seats.
    MusicStopped(MusicStopped),

    /// A player secured a seat this round.
    PlayerSeated(PlayerSeated),

    /// A player failed to secure a seat and left the game.
    PlayerEliminated(PlayerEliminated),

    /// Exactly one player remains; the game is over.
    WinnerDeclared(WinnerDeclared),
}

/// Round opened (coordinator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted {
    /// Round number, 1-based.
    pub round: u32,

    /// Players still in the game at round start.
    pub players: usize,

    /// Seats armed for this round; always `players - 1`.
    pub seats: usize,
}

/// Music stopped (coordinator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicStopped {
    pub round: u32,
}

/// Seat secured (player).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSeated {
    pub round: u32,
    pub player: PlayerId,
}

/// Player out (player).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEliminated {
    pub round: u32,
    pub player: PlayerId,
}

/// Game over (coordinator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinnerDeclared {
    /// The sole survivor.
    pub player: PlayerId,

    /// How many rounds the game took.
    pub rounds: u32,
}

// -----------------------------------------------------------------------------
// Convenience constructors
// -----------------------------------------------------------------------------

impl GameEvent {
    /// Convenience constructor for a RoundStarted event.
    pub fn round_started(round: u32, players: usize, seats: usize) -> Self {
        GameEvent::RoundStarted(RoundStarted {
            round,
            players,
            seats,
        })
    }

    /// Convenience constructor for a MusicStopped event.
    pub fn music_stopped(round: u32) -> Self {
        GameEvent::MusicStopped(MusicStopped { round })
    }

    /// Convenience constructor for a PlayerSeated event.
    pub fn player_seated(round: u32, player: PlayerId) -> Self {
        GameEvent::PlayerSeated(PlayerSeated { round, player })
    }

    /// Convenience constructor for a PlayerEliminated event.
    pub fn player_eliminated(round: u32, player: PlayerId) -> Self {
        GameEvent::PlayerEliminated(PlayerEliminated { round, player })
    }

    /// Convenience constructor for a WinnerDeclared event.
    pub fn winner_declared(player: PlayerId, rounds: u32) -> Self {
        GameEvent::WinnerDeclared(WinnerDeclared { player, rounds })
    }
}
