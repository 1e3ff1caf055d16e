//! Top-level game wiring.
//!
//! This module:
//! - builds the shared handles for one game,
//! - spawns one task per player plus the coordinator,
//! - drains the observable event stream into the log,
//! - joins every task once the game is decided.

use anyhow::{Context, Result};
use chairs_core::{GameEvent, PlayerId};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::coordinator;
use crate::music::{MusicClock, RandomMusicClock};
use crate::player;
use crate::types::{EventRx, EventTx, GameHandles};

/// A spawned game: the shared handles plus every task driving it.
pub struct RunningGame {
    pub handles: GameHandles,
    pub tasks: Vec<JoinHandle<()>>,
}

/// Spawn the coordinator and one task per player against a fresh set
/// of shared handles.
///
/// The caller keeps the receiving end of `events`; the stream ends
/// when the last actor is done and the senders are all dropped.
pub fn spawn_game<M>(config: &Config, music: M, events: EventTx) -> RunningGame
where
    M: MusicClock + 'static,
{
    let handles = GameHandles::new(config.players);
    let mut tasks = Vec::with_capacity(config.players + 1);

    for id in 1..=config.players as u32 {
        let handles_clone = handles.clone();
        let events_clone = events.clone();
        let pace = config.pace();
        tasks.push(tokio::spawn(async move {
            player::run_player(PlayerId(id), handles_clone, events_clone, pace).await;
        }));
    }

    // The coordinator consumes `events` itself, so nothing here keeps
    // the stream open once the game is over.
    {
        let handles_clone = handles.clone();
        let settle = config.settle();
        tasks.push(tokio::spawn(async move {
            coordinator::run_coordinator(handles_clone, events, music, settle).await;
        }));
    }

    RunningGame { handles, tasks }
}

/// Run one full game with the given configuration, logging every event.
pub async fn run(config: Config) -> Result<()> {
    let (event_tx, event_rx): (EventTx, EventRx) = mpsc::unbounded_channel();

    let music = RandomMusicClock::new(config.music_min(), config.music_max());
    let game = spawn_game(&config, music, event_tx);

    drain_events(event_rx).await;

    for task in game.tasks {
        task.await.context("game task panicked")?;
    }

    Ok(())
}

async fn drain_events(mut events: EventRx) {
    while let Some(event) = events.recv().await {
        log_event(&event);
    }
}

/// Render one event as a structured log line.
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::RoundStarted(e) => {
            info!(round = e.round, players = e.players, seats = e.seats, "round started");
        }
        GameEvent::MusicStopped(e) => {
            info!(round = e.round, "music stopped");
        }
        GameEvent::PlayerSeated(e) => {
            info!(round = e.round, player = %e.player, "player seated");
        }
        GameEvent::PlayerEliminated(e) => {
            info!(round = e.round, player = %e.player, "player eliminated");
        }
        GameEvent::WinnerDeclared(e) => {
            info!(winner = %e.player, rounds = e.rounds, "winner declared");
        }
    }
}
