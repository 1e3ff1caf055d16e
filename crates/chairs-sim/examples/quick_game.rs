//! Quick demo: a small, fast game with a fixed music delay.
//!
//! Run with:
//!   cargo run -p chairs-sim --example quick_game

use std::time::Duration;

use chairs_core::GameEvent;
use chairs_sim::config::Config;
use chairs_sim::music::FixedMusicClock;
use chairs_sim::sim::spawn_game;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    let config = Config {
        players: 3,
        music_min_ms: 300,
        music_max_ms: 300,
        settle_ms: 100,
        pace_ms: 200,
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let music = FixedMusicClock::new(Duration::from_millis(300));
    let game = spawn_game(&config, music, event_tx);

    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::RoundStarted(e) => {
                println!("round {}: {} players, {} seats", e.round, e.players, e.seats);
            }
            GameEvent::MusicStopped(e) => println!("round {}: music stopped", e.round),
            GameEvent::PlayerSeated(e) => {
                println!("round {}: player {} seated", e.round, e.player);
            }
            GameEvent::PlayerEliminated(e) => {
                println!("round {}: player {} eliminated", e.round, e.player);
            }
            GameEvent::WinnerDeclared(e) => {
                println!("player {} wins after {} rounds", e.player, e.rounds);
            }
        }
    }

    for task in game.tasks {
        task.await.expect("game task panicked");
    }
}
