use std::time::{Duration, Instant};

/// Across-restart bookkeeping for the header line: how long the current game
/// has run, the best score so far, and how many games were played.
pub struct GameMetrics {
    started_at: Instant,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            best_score: 0,
            games_played: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Elapsed time as mm:ss
    pub fn format_elapsed(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
