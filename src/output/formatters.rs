//! Formatting utilities for terminal output

use crate::commands::Statistics;
use crate::core::{ATTEMPT_LIMIT, DigitStatus, Feedback, Game};
use colored::{ColoredString, Colorize};

/// Width of the longest bar in the win distribution
const DISTRIBUTION_BAR_WIDTH: usize = 20;

/// Short label shown next to a digit in plain-text legends
#[must_use]
pub const fn status_label(status: DigitStatus) -> &'static str {
    match status {
        DigitStatus::Correct => "right spot",
        DigitStatus::Misplaced => "wrong spot",
        DigitStatus::Wrong => "not in code",
    }
}

/// Render one digit as a colored terminal tile
#[must_use]
pub fn colored_digit(value: char, status: DigitStatus) -> ColoredString {
    let tile = format!(" {value} ");
    match status {
        DigitStatus::Correct => tile.black().on_green().bold(),
        DigitStatus::Misplaced => tile.black().on_yellow().bold(),
        DigitStatus::Wrong => tile.white().on_bright_black().bold(),
    }
}

/// Render a whole feedback row as colored tiles
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .into_iter()
        .map(|slot| colored_digit(slot.value, slot.status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Share-style summary: one emoji row per attempt
#[must_use]
pub fn emoji_grid(game: &Game) -> String {
    game.history()
        .iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remaining-attempts notice shown after a miss
#[must_use]
pub fn attempts_left_message(game: &Game) -> String {
    match game.attempts_left() {
        1 => "1 attempt left".to_string(),
        n => format!("{n} attempts left"),
    }
}

/// End-of-game message, or `None` while the game is still running
#[must_use]
pub fn outcome_message(game: &Game) -> Option<String> {
    if game.is_won() {
        let attempts = game.attempt_count();
        let noun = if attempts == 1 { "attempt" } else { "attempts" };
        Some(format!("You won in {attempts} {noun}!"))
    } else if game.is_lost() {
        Some(format!("You lost! Code was {}", game.secret()))
    } else {
        None
    }
}

/// Win distribution as one `attempt: bar count` line per attempt number
///
/// Bars are scaled so the most common winning attempt gets the full width.
#[must_use]
pub fn distribution_lines(stats: &Statistics) -> Vec<String> {
    let max = stats.win_distribution.iter().copied().max().unwrap_or(0);
    (1..=ATTEMPT_LIMIT)
        .map(|attempt| {
            let count = stats.win_distribution[attempt];
            if count == 0 {
                return format!("{attempt}: 0");
            }
            let width = (count * DISTRIBUTION_BAR_WIDTH / max).max(1);
            format!("{attempt}: {} {count}", "█".repeat(width))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_all_statuses() {
        assert_eq!(status_label(DigitStatus::Correct), "right spot");
        assert_eq!(status_label(DigitStatus::Misplaced), "wrong spot");
        assert_eq!(status_label(DigitStatus::Wrong), "not in code");
    }

    #[test]
    fn colored_row_keeps_digits_in_order() {
        colored::control::set_override(false);
        let mut game = Game::from_secret("1123").unwrap();
        let feedback = game.submit_guess("3211").unwrap();
        assert_eq!(colored_row(&feedback), " 3   2   1   1 ");
    }

    #[test]
    fn emoji_grid_one_row_per_attempt() {
        let mut game = Game::from_secret("1123").unwrap();
        game.submit_guess("1111").unwrap();
        game.submit_guess("1123").unwrap();
        assert_eq!(emoji_grid(&game), "🟩🟩⬜⬜\n🟩🟩🟩🟩");
    }

    #[test]
    fn attempts_left_wording() {
        let mut game = Game::from_secret("1123").unwrap();
        assert_eq!(attempts_left_message(&game), "6 attempts left");
        for _ in 0..ATTEMPT_LIMIT - 1 {
            game.submit_guess("0000").unwrap();
        }
        assert_eq!(attempts_left_message(&game), "1 attempt left");
    }

    #[test]
    fn distribution_scales_to_most_common_attempt() {
        let mut stats = Statistics::default();
        let games: [&[&str]; 4] = [
            &["1123"],
            &["0000", "1123"],
            &["0000", "1123"],
            &["0000", "9999", "5555", "1123"],
        ];
        for guesses in games {
            let mut game = Game::from_secret("1123").unwrap();
            for guess in guesses {
                game.submit_guess(guess).unwrap();
            }
            stats.record(&game);
        }

        let lines = distribution_lines(&stats);
        assert_eq!(lines.len(), ATTEMPT_LIMIT);
        assert_eq!(lines[0], format!("1: {} 1", "█".repeat(10)));
        assert_eq!(lines[1], format!("2: {} 2", "█".repeat(20)));
        assert_eq!(lines[2], "3: 0");
        assert_eq!(lines[3], format!("4: {} 1", "█".repeat(10)));
    }

    #[test]
    fn distribution_without_wins_is_all_zero() {
        let lines = distribution_lines(&Statistics::default());
        assert_eq!(lines.first().map(String::as_str), Some("1: 0"));
        assert!(lines.iter().all(|line| line.ends_with(": 0")));
    }

    #[test]
    fn outcome_messages() {
        let mut game = Game::from_secret("1123").unwrap();
        assert_eq!(outcome_message(&game), None);

        game.submit_guess("1123").unwrap();
        assert_eq!(
            outcome_message(&game).as_deref(),
            Some("You won in 1 attempt!")
        );

        let mut lost = Game::from_secret("0123").unwrap();
        for _ in 0..ATTEMPT_LIMIT {
            lost.submit_guess("9999").unwrap();
        }
        assert_eq!(
            outcome_message(&lost).as_deref(),
            Some("You lost! Code was 0123")
        );
    }
}
