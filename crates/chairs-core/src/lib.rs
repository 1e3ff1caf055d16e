//! chairs-core
//!
//! Pure musical-chairs coordination logic:
//! - player identity
//! - seat pool (round-scoped counting resource)
//! - round signal (music playing / stopped broadcast gate)
//! - shared game state and its invariants
//! - observable game events

pub mod player_id;
pub mod seat_pool;
pub mod round_signal;
pub mod game_state;
pub mod shutdown;
pub mod events;

pub use player_id::PlayerId;
pub use seat_pool::SeatPool;
pub use round_signal::{MusicState, RoundSignal};
pub use game_state::GameState;
pub use shutdown::ShutdownFlag;

pub use events::{
    GameEvent,
    MusicStopped,
    PlayerEliminated,
    PlayerSeated,
    RoundStarted,
    WinnerDeclared,
};
