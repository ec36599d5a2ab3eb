use std::time::{Duration, Instant};

use crate::game::{GameStatus, Snapshot};

/// In-memory statistics for the current process; nothing is persisted
pub struct SessionStats {
    pub started_at: Instant,
    pub elapsed: Duration,
    pub best_score: u32,
    pub games_played: u32,
    last_round: u32,
    last_status: GameStatus,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            last_round: 0,
            last_status: GameStatus::Running,
        }
    }

    /// Fold one presented snapshot into the statistics
    pub fn observe(&mut self, snapshot: &Snapshot) {
        if snapshot.round != self.last_round {
            self.on_game_start();
            self.last_round = snapshot.round;
        }

        self.best_score = self.best_score.max(snapshot.score);

        match (self.last_status, snapshot.status) {
            (GameStatus::Running, GameStatus::Over) => self.on_game_over(snapshot.score),
            (_, GameStatus::Running) => self.elapsed = self.started_at.elapsed(),
            (GameStatus::Over, GameStatus::Over) => {}
        }
        self.last_status = snapshot.status;
    }

    fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.elapsed = self.started_at.elapsed();
        tracing::debug!(
            final_score,
            best_score = self.best_score,
            games_played = self.games_played,
            "game finished"
        );
    }

    pub fn format_elapsed(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
