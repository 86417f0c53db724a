//! Guess evaluation command
//!
//! Scores a single guess against a given secret without running a game.

use crate::core::{Code, Feedback};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

impl EvaluationResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guess == self.secret
    }
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code is not exactly 4 ASCII digits.
pub fn evaluate_guess(secret: &str, guess: &str) -> Result<EvaluationResult, String> {
    let secret = Code::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = Feedback::evaluate(&guess, &secret);

    Ok(EvaluationResult {
        secret,
        guess,
        feedback,
    })
}
