//! Core domain types for Numberle
//!
//! This module contains the game engine: code validation, the two-pass
//! feedback evaluator and the attempt/status lifecycle. Nothing here does I/O.

mod code;
mod feedback;
mod game;

pub use code::{CODE_LENGTH, Code, CodeError, MAX_GENERATED, MIN_GENERATED};
pub use feedback::{DigitFeedback, DigitStatus, Feedback};
pub use game::{ATTEMPT_LIMIT, Game, GameError, GameStatus};
