//! Win/loss statistics across games in one process
//!
//! Nothing is persisted; statistics reset when the program exits.

use super::{GameSession, GameStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of guesses used; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Sessions that are still active are ignored and `false` is returned.
    pub fn record(&mut self, session: &GameSession) -> bool {
        match session.status() {
            GameStatus::Active => return false,
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                let used = session.guesses_used();
                if self.guess_distribution.len() <= used {
                    self.guess_distribution.resize(used + 1, 0);
                }
                self.guess_distribution[used] += 1;
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
        true
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins that took exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        self.guess_distribution.get(guesses).copied().unwrap_or(0)
    }
}
