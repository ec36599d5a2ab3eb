use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::game::{GameConfig, GameEngine, GameLoop};
use crate::input::KeyboardInput;
use crate::render::{Palette, Renderer, TerminalSink};

/// Keyboard play in the terminal's alternate screen
pub struct HumanMode {
    engine: GameEngine,
    palette: Palette,
}

impl HumanMode {
    /// Validates the configuration before touching the terminal
    pub fn new(config: GameConfig, palette: Palette) -> Result<Self> {
        let engine = GameEngine::new(config).context("Invalid game configuration")?;
        Ok(Self { engine, palette })
    }

    pub async fn run(self) -> Result<()> {
        let terminal = setup_terminal()?;

        let renderer = Renderer::new(self.engine.config().clone(), self.palette);
        let sink = TerminalSink::new(terminal, renderer);
        let mut game_loop = GameLoop::new(self.engine, KeyboardInput::spawn(), sink);

        let result = game_loop.run().await;

        // Restore the terminal even when the loop failed
        restore_terminal()?;

        result
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stderr(), LeaveAlternateScreen, Show).context("Failed to leave alternate screen")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            block: 7,
            ..Default::default()
        };
        let err = HumanMode::new(config, Palette::default()).err().unwrap();
        assert!(format!("{err:#}").contains("block (7) must evenly divide"));
    }

    #[test]
    fn test_accepts_default_config() {
        assert!(HumanMode::new(GameConfig::default(), Palette::default()).is_ok());
    }
}
