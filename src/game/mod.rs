//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine runs one tick at a time over a batch of intents; the loop drives it
//! at a fixed rate against pluggable input and output collaborators.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod game_loop;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use food::FoodSpawner;
pub use game_loop::{GameLoop, IntentSource, SnapshotSink};
pub use state::{GameStatus, Position, SnakeState, Snapshot};
