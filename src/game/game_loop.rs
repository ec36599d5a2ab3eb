//! Fixed-rate driver for the [`GameEngine`]
//!
//! Each tick drains the intent source without blocking, runs the engine,
//! presents the resulting snapshot and then sleeps until the next tick
//! boundary. Quitting takes effect only after the current tick is presented.

use anyhow::{Context, Result};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use super::action::Intent;
use super::engine::{GameEngine, TickOutcome};
use super::state::Snapshot;

/// Something that collects player intents between ticks
pub trait IntentSource {
    /// Everything received since the previous call, oldest first; never blocks
    fn poll_intents(&mut self) -> Vec<Intent>;
}

/// Something that shows a snapshot to the player
pub trait SnapshotSink {
    fn present(&mut self, snapshot: &Snapshot) -> Result<()>;
}

pub struct GameLoop<I, S> {
    engine: GameEngine,
    input: I,
    sink: S,
    tick_interval: Duration,
    ticks: u64,
}

impl<I: IntentSource, S: SnapshotSink> GameLoop<I, S> {
    pub fn new(engine: GameEngine, input: I, sink: S) -> Self {
        let tick_interval = engine.config().tick_interval();
        Self {
            engine,
            input,
            sink,
            tick_interval,
            ticks: 0,
        }
    }

    /// Tick until a quit intent is seen
    pub async fn run(&mut self) -> Result<()> {
        let mut ticker = interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately
        ticker.tick().await;

        tracing::info!(
            interval_ms = self.tick_interval.as_millis() as u64,
            "game loop started"
        );

        loop {
            if self.run_tick()? == TickOutcome::Quit {
                break;
            }
            ticker.tick().await;
        }

        tracing::info!(ticks = self.ticks, "game loop stopped");
        Ok(())
    }

    /// One pass of poll, simulate and present, without waiting
    pub fn run_tick(&mut self) -> Result<TickOutcome> {
        let intents = self.input.poll_intents();
        let outcome = self.engine.tick(&intents);
        self.ticks += 1;

        self.sink
            .present(&self.engine.snapshot())
            .with_context(|| format!("Failed to present tick {}", self.ticks))?;

        Ok(outcome)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }
}
