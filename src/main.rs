use anyhow::Result;
use block_snake::game::GameConfig;
use block_snake::modes::HumanMode;
use block_snake::render::Palette;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "block_snake")]
#[command(version, about = "Snake on a fixed-tick grid, in the terminal")]
struct Cli {
    /// JSON file with a game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels, border included
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels, border included
    #[arg(long)]
    height: Option<u32>,

    /// Margin around the playable area, in pixels
    #[arg(long)]
    border: Option<u32>,

    /// Grid cell size in pixels
    #[arg(long)]
    block: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Use the 16-color palette
    #[arg(long)]
    basic_colors: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if let Some(block) = self.block {
            config.block = block;
        }
        if let Some(speed) = self.speed {
            config.ticks_per_second = speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    block_snake::logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    let palette = if cli.basic_colors {
        Palette::basic()
    } else {
        Palette::default()
    };

    let human_mode = HumanMode::new(config, palette)?;
    human_mode.run().await?;

    Ok(())
}
