//! Block Snake - a fixed-tick Snake game for the terminal
//!
//! This library provides:
//! - Core simulation and fixed-rate loop (game module), free of terminal I/O
//! - Keyboard input (input module)
//! - TUI rendering (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
