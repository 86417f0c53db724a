//! Numberle feedback calculation and representation
//!
//! Feedback holds one `DigitFeedback` per guessed position:
//! - Correct = digit in the right position
//! - Misplaced = digit elsewhere in the secret, not yet claimed
//! - Wrong = no unclaimed occurrence of the digit remains

use super::code::{CODE_LENGTH, Code};
use std::fmt;
use std::ops::Index;

/// Per-digit verdict for one guessed position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitStatus {
    Correct,
    Misplaced,
    Wrong,
}

/// One evaluated position: the guessed digit and its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitFeedback {
    pub value: char,
    pub status: DigitStatus,
}

/// Evaluated guess: one `DigitFeedback` per position, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([DigitFeedback; CODE_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is scored against `secret`
    ///
    /// Duplicate digits are resolved against a pool of unclaimed secret
    /// digits, so a digit is never reported as Correct or Misplaced more
    /// often than it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: left to right, mark Misplaced while the pool still holds
    ///    that digit (consuming one), otherwise Wrong
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Code, DigitStatus, Feedback};
    ///
    /// let secret = Code::new("1123").unwrap();
    /// let guess = Code::new("1111").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     [DigitStatus::Correct, DigitStatus::Correct, DigitStatus::Wrong, DigitStatus::Wrong]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, secret: &Code) -> Self {
        let mut result: [Option<DigitStatus>; CODE_LENGTH] = [None; CODE_LENGTH];
        let mut pool = secret.digit_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            let digit = guess.digit_at(i);
            if digit == secret.digit_at(i) {
                *slot = Some(DigitStatus::Correct);
                if let Some(count) = pool.get_mut(&digit) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: claim remaining occurrences
        for (i, slot) in result.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let digit = guess.digit_at(i);
            *slot = match pool.get_mut(&digit) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Some(DigitStatus::Misplaced)
                }
                _ => Some(DigitStatus::Wrong),
            };
        }

        let slots = std::array::from_fn(|i| DigitFeedback {
            value: char::from(guess.digit_at(i)),
            status: result[i].unwrap_or(DigitStatus::Wrong),
        });

        Self(slots)
    }

    /// Get just the verdicts, in guess order
    #[must_use]
    pub fn statuses(&self) -> [DigitStatus; CODE_LENGTH] {
        self.0.map(|slot| slot.status)
    }

    /// The guessed digits as a string
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.0.iter().map(|slot| slot.value).collect()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|slot| slot.status == DigitStatus::Correct)
    }

    /// Count the number of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(DigitStatus::Correct)
    }

    /// Count the number of Misplaced positions
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.count(DigitStatus::Misplaced)
    }

    fn count(&self, status: DigitStatus) -> usize {
        self.0.iter().filter(|slot| slot.status == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|slot| slot.status.emoji()).collect()
    }
}

impl DigitStatus {
    /// Emoji square used in shareable summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

impl fmt::Display for DigitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "Correct",
            Self::Misplaced => "Misplaced",
            Self::Wrong => "Wrong",
        };
        f.write_str(name)
    }
}

impl Index<usize> for Feedback {
    type Output = DigitFeedback;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a DigitFeedback;
    type IntoIter = std::slice::Iter<'a, DigitFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess_text(), self.to_emoji())
    }
}
