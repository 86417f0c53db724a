//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Reads guesses line by line from any
//! `BufRead` and writes to any `Write`, so a whole session can be scripted.

use super::stats::Statistics;
use crate::core::{ATTEMPT_LIMIT, CODE_LENGTH, Code, Game, GameError};
use crate::output::formatters::{
    attempts_left_message, colored_row, distribution_lines, emoji_grid, outcome_message,
};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Every game uses `secret` when one is given, otherwise a fresh random code.
/// Returns the session statistics once the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    secret: Option<Code>,
    reader: &mut R,
    out: &mut W,
) -> Result<Statistics, String> {
    let mut session = Session {
        reader,
        out,
        secret,
    };
    session.run()
}

struct Session<'a, R, W> {
    reader: &'a mut R,
    out: &'a mut W,
    secret: Option<Code>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<Statistics, String> {
        self.print_banner()?;

        let mut stats = Statistics::default();
        let mut game = Game::with_optional_secret(self.secret);

        loop {
            let prompt = format!("Guess {}/{ATTEMPT_LIMIT}", game.attempt_count() + 1);
            let Some(input) = self.get_user_input(&prompt)? else {
                self.line("")?;
                return self.farewell(stats);
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return self.farewell(stats),
                "new" | "n" => {
                    game = Game::with_optional_secret(self.secret);
                    self.line("\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {}
            }

            match game.submit_guess(&input) {
                Ok(feedback) => {
                    self.line(&format!("  {}", colored_row(&feedback)))?;
                    if !game.is_over() {
                        self.line(&format!("  {}\n", attempts_left_message(&game)))?;
                        continue;
                    }
                }
                Err(GameError::InvalidGuessFormat(_)) => {
                    self.line(&format!(
                        "{}\n",
                        format!("❌ Enter exactly {CODE_LENGTH} digits.").red()
                    ))?;
                    continue;
                }
                Err(err @ GameError::GameAlreadyOver(_)) => {
                    self.line(&format!("{err}\n"))?;
                    continue;
                }
            }

            stats.record(&game);
            self.print_outcome(&game, &stats)?;

            match self.get_user_input("Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    game = Game::with_optional_secret(self.secret);
                    self.line("\n🔄 New game started!\n")?;
                }
                _ => return self.farewell(stats),
            }
        }
    }

    fn print_banner(&mut self) -> Result<(), String> {
        self.line("\n╔══════════════════════════════════════════════╗")?;
        self.line("║              Numberle - CLI Mode             ║")?;
        self.line("╚══════════════════════════════════════════════╝\n")?;
        self.line(&format!(
            "Guess the {CODE_LENGTH}-digit code in {ATTEMPT_LIMIT} tries."
        ))?;
        self.line(&format!(
            "  {} right digit, right spot",
            " 5 ".black().on_green().bold()
        ))?;
        self.line(&format!(
            "  {} digit is in the code, wrong spot",
            " 5 ".black().on_yellow().bold()
        ))?;
        self.line(&format!(
            "  {} no unclaimed 5 in the code\n",
            " 5 ".white().on_bright_black().bold()
        ))?;
        self.line("Commands: 'quit' to exit, 'new' for new game\n")
    }

    fn print_outcome(&mut self, game: &Game, stats: &Statistics) -> Result<(), String> {
        let message = outcome_message(game).unwrap_or_default();
        self.line("")?;
        if game.is_won() {
            self.line(&format!("🎉 {}", message.bright_green().bold()))?;
        } else {
            self.line(&format!("💥 {}", message.bright_red().bold()))?;
        }
        self.line(&format!("\n{}\n", emoji_grid(game)))?;
        self.line(&format!(
            "Games: {} | Won: {} | Win rate: {:.0}%\n",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        ))?;

        if stats.games_won > 0 {
            self.line("Wins by attempt:")?;
            for line in distribution_lines(stats) {
                self.line(&format!("  {line}"))?;
            }
            self.line("")?;
        }
        Ok(())
    }

    fn farewell(&mut self, stats: Statistics) -> Result<Statistics, String> {
        self.line("👋 Thanks for playing!")?;
        Ok(stats)
    }

    fn line(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.out, "{text}").map_err(|e| e.to_string())
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn get_user_input(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.out, "{prompt}: ").map_err(|e| e.to_string())?;
        self.out.flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }
}
