use anyhow::Result;
use canvas_snake::game::GameConfig;
use canvas_snake::logging::init_file_logger;
use canvas_snake::modes::HumanMode;
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "canvas_snake")]
#[command(version, about = "Snake on a wrapping grid, played in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where log records are written
    #[arg(long, default_value = "canvas_snake.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_file_logger(&cli.log_file)?;

    let config = cli.game_config()?;
    info!("starting with {:?}", config);

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
