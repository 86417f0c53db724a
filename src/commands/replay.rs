//! Game replay command
//!
//! Plays a fixed sequence of guesses against a known secret and reports
//! the resulting board.

use crate::core::{Feedback, Game, GameStatus};

/// Result of replaying a game
pub struct ReplayResult {
    pub secret: String,
    pub turns: Vec<Feedback>,
    pub status: GameStatus,
    pub attempts_left: usize,
}

/// Replay `guesses` in order against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not exactly 4 ASCII digits
/// - A guess is malformed
/// - Guesses remain after the game has already been won or lost
pub fn replay_game<S: AsRef<str>>(secret: &str, guesses: &[S]) -> Result<ReplayResult, String> {
    let mut game = Game::from_secret(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    for (i, guess) in guesses.iter().enumerate() {
        game.submit_guess(guess.as_ref())
            .map_err(|e| format!("Guess {} ({}): {e}", i + 1, guess.as_ref()))?;
    }

    Ok(ReplayResult {
        secret: game.secret().to_string(),
        turns: game.history().to_vec(),
        status: game.status(),
        attempts_left: game.attempts_left(),
    })
}
