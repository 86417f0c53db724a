//! Numberle game state
//!
//! A Game owns the secret, the evaluated guess history and the attempt
//! counter. `submit_guess` is the only mutator; everything else is a query.

use super::code::{Code, CodeError};
use super::feedback::Feedback;
use log::{debug, info, trace};
use rand::Rng;
use std::fmt;

/// Maximum number of guesses per game
pub const ATTEMPT_LIMIT: usize = 6;

/// Lifecycle status of a game
///
/// Transitions only go `Ongoing -> Won` or `Ongoing -> Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if this status is terminal
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ongoing => "Ongoing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        };
        f.write_str(name)
    }
}

/// Error type for rejected guesses
///
/// The game is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGuessFormat(CodeError),
    GameAlreadyOver(GameStatus),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessFormat(err) => write!(f, "Invalid guess: {err}"),
            Self::GameAlreadyOver(status) => {
                write!(f, "Game is already over ({status}); start a new game")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuessFormat(err) => Some(err),
            Self::GameAlreadyOver(_) => None,
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        Self::InvalidGuessFormat(err)
    }
}

/// A single Numberle game
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    history: Vec<Feedback>,
    attempt_count: usize,
    status: GameStatus,
}

impl Game {
    /// Create a game with a known secret
    #[must_use]
    pub fn new(secret: Code) -> Self {
        trace!("New game with secret {secret}");
        Self {
            secret,
            history: Vec::with_capacity(ATTEMPT_LIMIT),
            attempt_count: 0,
            status: GameStatus::Ongoing,
        }
    }

    /// Create a game from a secret string
    ///
    /// # Errors
    /// Returns `CodeError` if `secret` is not exactly 4 ASCII digits.
    pub fn from_secret(secret: &str) -> Result<Self, CodeError> {
        Code::new(secret).map(Self::new)
    }

    /// Create a game with a secret drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Code::random(rng))
    }

    /// Create a game with a randomly generated secret in `1000..=9999`
    #[must_use]
    pub fn random() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Use `secret` when given, otherwise generate one
    #[must_use]
    pub fn with_optional_secret(secret: Option<Code>) -> Self {
        secret.map_or_else(Self::random, Self::new)
    }

    /// Parse and evaluate a guess
    ///
    /// # Errors
    /// - `GameError::GameAlreadyOver` if the game has been won or lost
    /// - `GameError::InvalidGuessFormat` if `guess` is not exactly 4 ASCII digits
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Game, GameStatus};
    ///
    /// let mut game = Game::from_secret("1123").unwrap();
    /// let feedback = game.submit_guess("1123").unwrap();
    ///
    /// assert!(feedback.is_solved());
    /// assert_eq!(game.status(), GameStatus::Won);
    /// assert!(game.submit_guess("1123").is_err());
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> Result<Feedback, GameError> {
        self.ensure_ongoing()?;
        let code = Code::new(guess).inspect_err(|err| debug!("Rejected guess {guess:?}: {err}"))?;
        self.submit(code)
    }

    /// Evaluate an already-validated guess
    ///
    /// # Errors
    /// Returns `GameError::GameAlreadyOver` if the game has been won or lost.
    pub fn submit(&mut self, guess: Code) -> Result<Feedback, GameError> {
        self.ensure_ongoing()?;

        let feedback = Feedback::evaluate(&guess, &self.secret);
        self.history.push(feedback);
        self.attempt_count += 1;
        debug!(
            "Attempt {}/{ATTEMPT_LIMIT}: {guess} -> {}",
            self.attempt_count,
            feedback.to_emoji()
        );

        self.update_status(&guess);
        Ok(feedback)
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            debug!("Guess submitted after game ended ({})", self.status);
            return Err(GameError::GameAlreadyOver(self.status));
        }
        Ok(())
    }

    fn update_status(&mut self, guess: &Code) {
        if *guess == self.secret {
            self.status = GameStatus::Won;
            info!("Game won in {} attempts", self.attempt_count);
        } else if self.attempt_count >= ATTEMPT_LIMIT {
            self.status = GameStatus::Lost;
            info!("Game lost after {} attempts", self.attempt_count);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[inline]
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Guesses remaining before the game is lost
    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        ATTEMPT_LIMIT.saturating_sub(self.attempt_count)
    }

    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret code, e.g. for revealing it after a loss
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// All evaluated guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}, attempts={}", self.status, self.attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DigitStatus::{Correct, Misplaced, Wrong};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(secret: &str) -> Game {
        Game::from_secret(secret).unwrap()
    }

    #[test]
    fn new_game_initial_state() {
        let game = game("1123");
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.attempt_count(), 0);
        assert_eq!(game.attempts_left(), ATTEMPT_LIMIT);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
        assert_eq!(game.secret().text(), "1123");
    }

    #[test]
    fn winning_guess() {
        let mut game = game("1123");
        let feedback = game.submit_guess("1123").unwrap();

        assert_eq!(feedback.statuses(), [Correct; 4]);
        assert!(game.is_won());
        assert!(game.is_over());
        assert!(!game.is_lost());
        assert_eq!(game.attempt_count(), 1);
    }

    #[test]
    fn duplicate_digits_scenarios() {
        let mut game = game("1123");
        let first = game.submit_guess("1111").unwrap();
        assert_eq!(first.statuses(), [Correct, Correct, Wrong, Wrong]);

        let second = game.submit_guess("3211").unwrap();
        assert_eq!(second.statuses(), [Misplaced; 4]);
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn history_tracks_every_submission() {
        let mut game = game("1123");
        for (k, guess) in ["1111", "3211", "9999"].into_iter().enumerate() {
            let feedback = game.submit_guess(guess).unwrap();
            assert_eq!(game.history().len(), k + 1);
            assert_eq!(game.attempt_count(), k + 1);
            assert_eq!(game.history().last(), Some(&feedback));
        }
    }

    #[test]
    fn attempts_left_after_two_guesses() {
        let mut game = game("1123");
        game.submit_guess("0000").unwrap();
        game.submit_guess("9999").unwrap();
        assert_eq!(game.attempts_left(), 4);
        // Queries are idempotent
        assert_eq!(game.attempts_left(), 4);
        assert!(!game.is_won());
        assert!(!game.is_won());
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut game = game("1123");
        for guess in ["0000", "2222", "3333", "4444", "5555"] {
            game.submit_guess(guess).unwrap();
            assert_eq!(game.status(), GameStatus::Ongoing);
        }
        game.submit_guess("6666").unwrap();

        assert!(game.is_lost());
        assert_eq!(game.attempts_left(), 0);
        assert_eq!(game.attempt_count(), ATTEMPT_LIMIT);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut game = game("4096");
        for _ in 0..ATTEMPT_LIMIT - 1 {
            game.submit_guess("1111").unwrap();
        }
        game.submit_guess("4096").unwrap();
        assert!(game.is_won());
        assert_eq!(game.attempts_left(), 0);
    }

    #[test]
    fn submission_after_win_is_rejected() {
        let mut game = game("1123");
        game.submit_guess("1123").unwrap();

        let err = game.submit_guess("0000").unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver(GameStatus::Won));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.attempt_count(), 1);
    }

    #[test]
    fn submission_after_loss_is_rejected() {
        let mut game = game("1123");
        for _ in 0..ATTEMPT_LIMIT {
            game.submit_guess("0000").unwrap();
        }
        assert!(matches!(
            game.submit(Code::new("1123").unwrap()),
            Err(GameError::GameAlreadyOver(GameStatus::Lost))
        ));
        assert_eq!(game.attempt_count(), ATTEMPT_LIMIT);
        assert!(game.is_lost());
    }

    #[test]
    fn invalid_guess_does_not_mutate() {
        let mut game = game("1123");
        for bad in ["123", "12345", "12a3", "", " 1123"] {
            let err = game.submit_guess(bad).unwrap_err();
            assert!(matches!(err, GameError::InvalidGuessFormat(_)), "{bad:?}");
        }
        assert_eq!(game.attempt_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn already_over_checked_before_format() {
        let mut game = game("1123");
        game.submit_guess("1123").unwrap();
        assert_eq!(
            game.submit_guess("nope"),
            Err(GameError::GameAlreadyOver(GameStatus::Won))
        );
    }

    #[test]
    fn secret_with_leading_zero() {
        let mut game = game("0123");
        let feedback = game.submit_guess("0123").unwrap();
        assert!(feedback.is_solved());
        assert!(game.is_won());
    }

    #[test]
    fn from_secret_rejects_malformed() {
        assert_eq!(
            Game::from_secret("12").unwrap_err(),
            CodeError::InvalidLength(2)
        );
        assert_eq!(
            Game::from_secret("abcd").unwrap_err(),
            CodeError::InvalidCharacters
        );
    }

    #[test]
    fn generated_secret_has_no_leading_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let game = Game::with_rng(&mut rng);
            assert_ne!(game.secret().digit_at(0), b'0');
        }
    }

    #[test]
    fn optional_secret() {
        let secret = Code::new("0042").unwrap();
        assert_eq!(Game::with_optional_secret(Some(secret)).secret(), &secret);
        let generated = Game::with_optional_secret(None);
        assert_ne!(generated.secret().digit_at(0), b'0');
    }

    #[test]
    fn error_display_and_source() {
        use std::error::Error;

        let err = GameError::from(CodeError::InvalidLength(3));
        assert_eq!(
            err.to_string(),
            "Invalid guess: Code must be exactly 4 digits, got 3"
        );
        assert!(err.source().is_some());

        let over = GameError::GameAlreadyOver(GameStatus::Lost);
        assert_eq!(
            over.to_string(),
            "Game is already over (Lost); start a new game"
        );
        assert!(over.source().is_none());
    }

    #[test]
    fn game_display() {
        let mut game = game("1123");
        assert_eq!(game.to_string(), "Game Ongoing, attempts=0");
        game.submit_guess("1123").unwrap();
        assert_eq!(game.to_string(), "Game Won, attempts=1");
    }
}
