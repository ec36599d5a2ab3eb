use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::state::Position;

/// Positions are `i32` pixels, so no board edge may go past this
pub const MAX_BOARD_SIZE: u32 = i32::MAX as u32;

/// Keeps the tick interval at a whole millisecond or more
pub const MAX_TICKS_PER_SECOND: u32 = 1000;

/// Configuration for the game
///
/// All lengths are in pixel units. The playable interior is the board minus a
/// `border` margin on every side, and is tiled by square cells of `block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the whole board, border included
    pub board_width: u32,
    /// Height of the whole board, border included
    pub board_height: u32,
    /// Margin around the playable interior
    pub border: u32,
    /// Edge length of one grid cell
    pub block: u32,
    /// Simulation rate
    pub ticks_per_second: u32,
    /// Fixed seed for food placement; random when absent
    pub seed: Option<u64>,
}

/// A construction-time parameter violates the board geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive")]
    NotPositive { name: &'static str },

    #[error("{name} ({size}) must exceed twice the border plus one block ({minimum})")]
    BoardTooSmall {
        name: &'static str,
        size: u32,
        minimum: u64,
    },

    #[error("{name} ({value}) exceeds the supported maximum ({maximum})")]
    TooLarge {
        name: &'static str,
        value: u32,
        maximum: u32,
    },

    #[error("block ({block}) must evenly divide {name} ({value})")]
    Misaligned {
        name: &'static str,
        value: u32,
        block: u32,
    },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 400,
            border: 30,
            block: 10,
            ticks_per_second: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(board_width: u32, board_height: u32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Check the geometry preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("border", self.border),
            ("block", self.block),
            ("ticks_per_second", self.ticks_per_second),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive { name });
            }
        }

        for (name, value, maximum) in [
            ("board_width", self.board_width, MAX_BOARD_SIZE),
            ("board_height", self.board_height, MAX_BOARD_SIZE),
            ("ticks_per_second", self.ticks_per_second, MAX_TICKS_PER_SECOND),
        ] {
            if value > maximum {
                return Err(ConfigError::TooLarge {
                    name,
                    value,
                    maximum,
                });
            }
        }

        let minimum = 2 * u64::from(self.border) + u64::from(self.block);
        for (name, size) in [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
        ] {
            if u64::from(size) <= minimum {
                return Err(ConfigError::BoardTooSmall {
                    name,
                    size,
                    minimum,
                });
            }
        }

        for (name, value) in [
            ("border", self.border),
            ("interior width", self.interior_width()),
            ("interior height", self.interior_height()),
        ] {
            if value % self.block != 0 {
                return Err(ConfigError::Misaligned {
                    name,
                    value,
                    block: self.block,
                });
            }
        }

        Ok(())
    }

    pub fn interior_width(&self) -> u32 {
        self.board_width - 2 * self.border
    }

    pub fn interior_height(&self) -> u32 {
        self.board_height - 2 * self.border
    }

    /// Number of playable cells per row
    pub fn columns(&self) -> u32 {
        self.interior_width() / self.block
    }

    /// Number of playable cells per column
    pub fn rows(&self) -> u32 {
        self.interior_height() / self.block
    }

    /// Top-left pixel of the cell at (column, row) of the interior
    pub fn cell_origin(&self, column: u32, row: u32) -> Position {
        Position::new(
            (self.border + column * self.block) as i32,
            (self.border + row * self.block) as i32,
        )
    }

    /// Board centre, snapped down onto the grid
    pub fn spawn_position(&self) -> Position {
        let column = (self.board_width / 2 - self.border) / self.block;
        let row = (self.board_height / 2 - self.border) / self.block;
        self.cell_origin(column, row)
    }

    /// Whether a cell whose top-left corner is `pos` lies fully inside the interior
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let border = self.border as i32;
        let block = self.block as i32;
        pos.x >= border
            && pos.x <= self.board_width as i32 - border - block
            && pos.y >= border
            && pos.y <= self.board_height as i32 - border - block
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.ticks_per_second.max(1)))
    }
}
