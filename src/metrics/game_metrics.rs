use std::time::{Duration, Instant};

/// Statistics across the games of one session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Best final score so far; scores can be negative, so none until a game ends
    pub best_score: Option<i32>,
    pub games_played: u32,
    pub games_won: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: None,
            games_played: 0,
            games_won: 0,
        }
    }

    /// Refresh the elapsed time of the running game
    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: i32, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
        self.best_score = Some(self.best_score.map_or(final_score, |best| best.max(final_score)));
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
