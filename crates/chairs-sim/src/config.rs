//! Configuration for the simulation.
//!
//! For now this is intentionally simple: you can either use defaults
//! or override via a few environment variables:
//!
//! - `CHAIRS_PLAYERS`      (default: "4", minimum 2)
//! - `CHAIRS_MUSIC_MIN_MS` (default: "1000")
//! - `CHAIRS_MUSIC_MAX_MS` (default: "10000")
//! - `CHAIRS_SETTLE_MS`    (default: "2000")
//! - `CHAIRS_PACE_MS`      (default: "4000", must be >= settle)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of competing players.
    pub players: usize,

    /// Lower bound on how long the music plays each round.
    pub music_min_ms: u64,

    /// Upper bound on how long the music plays each round.
    pub music_max_ms: u64,

    /// Grace period after the music stops, for every racer to resolve
    /// before the coordinator re-checks the player count.
    pub settle_ms: u64,

    /// Delay a seated player waits after a round before re-entering the
    /// wait for the next stop. Must be at least the settling delay, or
    /// a fast player could consume the previous round's stop again.
    pub pace_ms: u64,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to reasonable defaults.
    pub fn from_env() -> Result<Self> {
        let players = read_env_or_default("CHAIRS_PLAYERS", 4usize)?;
        let music_min_ms = read_env_or_default("CHAIRS_MUSIC_MIN_MS", 1_000u64)?;
        let music_max_ms = read_env_or_default("CHAIRS_MUSIC_MAX_MS", 10_000u64)?;
        let settle_ms = read_env_or_default("CHAIRS_SETTLE_MS", 2_000u64)?;
        let pace_ms = read_env_or_default("CHAIRS_PACE_MS", 4_000u64)?;

        let config = Config {
            players,
            music_min_ms,
            music_max_ms,
            settle_ms,
            pace_ms,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.players < 2 {
            bail!("CHAIRS_PLAYERS must be at least 2, got {}", self.players);
        }
        if self.music_min_ms == 0 {
            bail!("CHAIRS_MUSIC_MIN_MS must be at least 1");
        }
        if self.music_min_ms > self.music_max_ms {
            bail!(
                "CHAIRS_MUSIC_MIN_MS ({}) must not exceed CHAIRS_MUSIC_MAX_MS ({})",
                self.music_min_ms,
                self.music_max_ms
            );
        }
        if self.pace_ms < self.settle_ms {
            bail!(
                "CHAIRS_PACE_MS ({}) must be at least CHAIRS_SETTLE_MS ({})",
                self.pace_ms,
                self.settle_ms
            );
        }
        Ok(())
    }

    /// Convenience: music lower bound as a `Duration`.
    pub fn music_min(&self) -> Duration {
        Duration::from_millis(self.music_min_ms)
    }

    /// Convenience: music upper bound as a `Duration`.
    pub fn music_max(&self) -> Duration {
        Duration::from_millis(self.music_max_ms)
    }

    /// Convenience: settling delay as a `Duration`.
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Convenience: pacing delay as a `Duration`.
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, val)),
        Err(_) => Ok(default),
    }
}
