//! Musical-chairs simulation binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use chairs_sim::config::Config;
use chairs_sim::sim;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    tracing::info!(
        players = config.players,
        music_min_ms = config.music_min_ms,
        music_max_ms = config.music_max_ms,
        settle_ms = config.settle_ms,
        pace_ms = config.pace_ms,
        "starting musical chairs"
    );

    sim::run(config).await?;

    tracing::info!("musical chairs finished");
    Ok(())
}
