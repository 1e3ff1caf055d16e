//! Music duration policy.
//!
//! How long the music plays each round is a policy, not part of the
//! coordination contract, so it is injected into the coordinator
//! behind a small trait: the real game draws random durations, demos
//! and tests use a fixed one.

use std::time::Duration;

use rand::Rng;

/// Source of per-round music durations.
pub trait MusicClock: Send {
    /// How long the music should play in the next round.
    fn next_play_duration(&mut self) -> Duration;
}

/// Uniformly random duration within configured bounds.
#[derive(Debug)]
pub struct RandomMusicClock {
    min: Duration,
    max: Duration,
}

impl RandomMusicClock {
    /// Bounds are inclusive; `min` must not exceed `max` (enforced by
    /// config validation upstream).
    pub fn new(min: Duration, max: Duration) -> Self {
        RandomMusicClock { min, max }
    }
}

impl MusicClock for RandomMusicClock {
    fn next_play_duration(&mut self) -> Duration {
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
    }
}

/// Constant duration, for demos and deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedMusicClock {
    duration: Duration,
}

impl FixedMusicClock {
    pub fn new(duration: Duration) -> Self {
        FixedMusicClock { duration }
    }
}

impl MusicClock for FixedMusicClock {
    fn next_play_duration(&mut self) -> Duration {
        self.duration
    }
}
