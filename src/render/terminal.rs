use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend};

use super::renderer::Renderer;
use crate::game::{Snapshot, SnapshotSink};
use crate::metrics::SessionStats;

/// Presents each snapshot as one full terminal frame
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
    stats: SessionStats,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>, renderer: Renderer) -> Self {
        Self {
            terminal,
            renderer,
            stats: SessionStats::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[cfg(test)]
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> SnapshotSink for TerminalSink<B> {
    fn present(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.stats.observe(snapshot);

        let renderer = &self.renderer;
        let stats = &self.stats;
        self.terminal
            .draw(|frame| renderer.render(frame, snapshot, stats))
            .context("Failed to draw frame")?;

        Ok(())
    }
}
