//! Display functions for command results

use super::formatters::{colored_row, status_label};
use crate::commands::{EvaluationResult, ReplayResult};
use crate::core::GameStatus;
use colored::Colorize;

/// Print the result of evaluating a single guess
pub fn print_evaluation_result(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against secret {}",
        result.guess.to_string().bright_yellow().bold(),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}", colored_row(&result.feedback), result.feedback.to_emoji());
    println!();
    for slot in &result.feedback {
        println!("  {}  {}", slot.value, status_label(slot.status));
    }

    println!();
    if result.is_solved() {
        println!("{}", "✅ Code cracked!".green().bold());
    } else {
        println!(
            "{} correct, {} misplaced",
            result.feedback.count_correct(),
            result.feedback.count_misplaced()
        );
    }
}

/// Print the board produced by replaying a game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Replaying against {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    for (i, feedback) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}   {}  ({} correct)",
            i + 1,
            colored_row(feedback),
            feedback.to_emoji(),
            feedback.count_correct()
        );
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Won in {} guesses!", result.turns.len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Lost! Code was {}", result.secret).red().bold()
        ),
        GameStatus::Ongoing => println!(
            "Still playing: {} attempts left",
            result.attempts_left
        ),
    }
}
