//! Numberle
//!
//! A Wordle-style guessing game over 4-digit codes. Each guess is scored
//! digit by digit as Correct, Misplaced or Wrong, and the player has six
//! attempts to crack the code.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::core::{DigitStatus, Game};
//!
//! let mut game = Game::from_secret("1123").unwrap();
//! let feedback = game.submit_guess("3211").unwrap();
//!
//! assert_eq!(feedback.statuses(), [DigitStatus::Misplaced; 4]);
//! assert_eq!(game.attempts_left(), 5);
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
