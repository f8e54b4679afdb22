use anyhow::{Context, Result, anyhow};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use grid_snake::persistence::JsonFileStore;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// TOML config file (defaults to $GRID_SNAKE_CONFIG, then config/snake.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tiles along each side of the grid
    #[arg(long)]
    tiles: Option<usize>,

    /// File holding the high score
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Where log output goes; the terminal itself is taken by the game
    #[arg(long, default_value = "grid-snake.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(tiles) = cli.tiles {
        config.tile_count = tiles;
    }
    if let Some(path) = cli.high_score_file {
        config.high_score_path = path;
    }
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {e}"))?;

    tracing::info!(
        tiles = config.tile_count,
        tick_ms = config.tick_interval_ms,
        high_score_path = ?config.high_score_path,
        "Grid snake starting"
    );

    let store = JsonFileStore::new(config.high_score_path.clone());
    let mut human_mode = HumanMode::new(config, store);
    human_mode.run().await
}
