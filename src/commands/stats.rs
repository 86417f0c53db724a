//! In-session statistics
//!
//! Tracked per process only; nothing is written to disk.

use crate::core::{ATTEMPT_LIMIT, Game};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `k` counts games won on attempt `k` (index 0 unused)
    pub win_distribution: [usize; ATTEMPT_LIMIT + 1],
}

impl Statistics {
    /// Record a finished game; ongoing games are ignored
    pub fn record(&mut self, game: &Game) {
        if !game.is_over() {
            return;
        }
        self.total_games += 1;
        if game.is_won() {
            self.games_won += 1;
            if let Some(slot) = self.win_distribution.get_mut(game.attempt_count()) {
                *slot += 1;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
